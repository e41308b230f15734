use crate::explain::ExplanationService;
// app's shared state, read-only once the server is up

pub struct AppState {
    pub service: ExplanationService,
    pub model: String, // reported by /health
}
