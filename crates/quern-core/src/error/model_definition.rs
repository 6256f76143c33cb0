use super::Error;

/// A model cannot be turned into a signature.
#[derive(Debug)]
pub(super) struct ModelDefinitionError {
    pub(super) model: Box<str>,
    pub(super) message: Box<str>,
}

impl Error {
    pub fn model_definition(model: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ModelDefinition(ModelDefinitionError {
            model: model.into().into(),
            message: message.into().into(),
        }))
    }

    pub fn is_model_definition(&self) -> bool {
        self.find_kind(|kind| match kind {
            super::ErrorKind::ModelDefinition(err) => Some(err),
            _ => None,
        })
        .is_some()
    }
}

impl std::fmt::Display for ModelDefinitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid model `{}`: {}", self.model, self.message)
    }
}
