use serde::Deserialize;

use crate::{
    dto::NotificationRequest,
    error::NotifyError,
    validation::{is_non_empty_message, is_valid_email},
};

/// Parses the first JSON value of a raw `/notify` body.
///
/// Anything after that value is ignored. The request `Content-Type` is not
/// consulted.
pub fn decode(body: &[u8]) -> Result<NotificationRequest, NotifyError> {
    let mut de = serde_json::Deserializer::from_slice(body);
    NotificationRequest::deserialize(&mut de).map_err(Into::into)
}

/// Validates a decoded request, email first.
///
/// Nothing is dispatched: a request that passes validation is only
/// acknowledged.
pub fn submit(request: &NotificationRequest) -> Result<(), NotifyError> {
    if !is_valid_email(&request.email) {
        return Err(NotifyError::InvalidEmail);
    }

    if !is_non_empty_message(&request.message) {
        return Err(NotifyError::EmptyMessage);
    }

    tracing::debug!("Accepted notification for '{}'", request.email);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, message: &str) -> NotificationRequest {
        NotificationRequest {
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn decodes_well_formed_body() {
        let req = decode(br#"{"email":"test@example.com","message":"hi"}"#).unwrap();
        assert_eq!(req.email, "test@example.com");
        assert_eq!(req.message, "hi");
    }

    #[test]
    fn ignores_unknown_fields() {
        let req = decode(br#"{"email":"a@b.co","message":"m","priority":"high"}"#).unwrap();
        assert_eq!(req.email, "a@b.co");
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        let req = decode(br#"{"email":"test@example.com"}"#).unwrap();
        assert_eq!(req.email, "test@example.com");
        assert_eq!(req.message, "");
        assert!(matches!(submit(&req), Err(NotifyError::EmptyMessage)));

        let req = decode(b"{}").unwrap();
        assert_eq!(req.email, "");
        assert!(matches!(submit(&req), Err(NotifyError::InvalidEmail)));
    }

    #[test]
    fn ignores_bytes_after_first_value() {
        let req = decode(b"{\"email\":\"a@b.co\",\"message\":\"m\"}\n{\"email\"").unwrap();
        assert_eq!(req.email, "a@b.co");
        assert_eq!(req.message, "m");
    }

    #[test]
    fn rejects_truncated_or_mistyped_bodies() {
        let bodies: [&[u8]; 5] = [
            br#"{"email":"#,
            b"",
            b"not json",
            br#"{"email":1,"message":"hi"}"#,
            br#""test@example.com""#,
        ];
        for body in bodies {
            assert!(matches!(decode(body), Err(NotifyError::InvalidJson(_))));
        }
    }

    #[test]
    fn accepts_valid_request() {
        assert!(submit(&request("test@example.com", "hi")).is_ok());
    }

    #[test]
    fn email_is_checked_before_message() {
        assert!(matches!(
            submit(&request("bad-email", "")),
            Err(NotifyError::InvalidEmail)
        ));
    }

    #[test]
    fn rejects_empty_message_but_not_whitespace() {
        assert!(matches!(
            submit(&request("test@example.com", "")),
            Err(NotifyError::EmptyMessage)
        ));
        assert!(submit(&request("test@example.com", " ")).is_ok());
    }
}
