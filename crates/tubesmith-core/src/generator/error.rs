use thiserror::Error;

/// Failures surfaced by `ArtifactGenerator::generate_artifact`.
///
/// Messages are generic; provider output and transport detail go to the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("The AI returned a response in an unexpected format.")]
    MalformedResponse,

    #[error("Failed to generate video content. The API might be down or the request was invalid.")]
    GenerationFailed,
}
