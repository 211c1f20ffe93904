use serde::Serialize;

// Body of the plain `{"message": ...}` replies
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub(crate) message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse { message: message.into() }
    }
}

#[derive(Serialize, Debug)]
pub struct LevelsResponse {
    pub(crate) levels: Vec<String>,
}
