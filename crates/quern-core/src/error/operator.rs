use super::Error;

/// A comparison was requested that the field cannot take part in, either
/// because of the operator itself or because of the operand's type.
#[derive(Debug)]
pub(super) struct OperatorError {
    pub(super) field: Box<str>,
    pub(super) message: Box<str>,
}

impl Error {
    pub fn operator(field: impl core::fmt::Display, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Operator(OperatorError {
            field: field.to_string().into(),
            message: message.into().into(),
        }))
    }

    pub fn is_operator(&self) -> bool {
        self.find_kind(|kind| match kind {
            super::ErrorKind::Operator(err) => Some(err),
            _ => None,
        })
        .is_some()
    }
}

impl std::fmt::Display for OperatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
