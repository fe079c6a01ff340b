/// One multimodal completion request: the stylist prompt plus the
/// processed upload as a base64 data URL.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub prompt: String,
    pub image_data_url: String,
}
