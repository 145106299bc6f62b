//! Tag Commands
//!
//! Frontend bindings for assigning tags to classes.

use serde::Serialize;

use super::post;
use crate::error::ApiError;
use crate::models::SuccessFlag;

pub const ASSIGN_TAG_TO_CLASS: &str = "/assign-tag-to-class";
pub const REMOVE_TAG_FROM_CLASS: &str = "/remove-tag-from-class";

// ========================
// Argument Structs
// ========================

/// Body shared by assignment and removal; the tag index travels as a string
#[derive(Serialize)]
struct ClassTagArgs<'a> {
    #[serde(rename = "className")]
    class_name: &'a str,
    #[serde(rename = "tagIndex")]
    tag_index: String,
    path: &'a str,
}

// ========================
// Class-Tag Relationship Commands
// ========================

pub async fn assign_tag_to_class(path: &str, class_name: &str, tag_index: u32) -> Result<(), ApiError> {
    let args = ClassTagArgs { class_name, tag_index: tag_index.to_string(), path };
    let reply: SuccessFlag = post(ASSIGN_TAG_TO_CLASS, &args).await?;
    check(reply, ASSIGN_TAG_TO_CLASS)
}

pub async fn remove_tag_from_class(path: &str, class_name: &str, tag_index: u32) -> Result<(), ApiError> {
    let args = ClassTagArgs { class_name, tag_index: tag_index.to_string(), path };
    let reply: SuccessFlag = post(REMOVE_TAG_FROM_CLASS, &args).await?;
    check(reply, REMOVE_TAG_FROM_CLASS)
}

fn check(reply: SuccessFlag, endpoint: &'static str) -> Result<(), ApiError> {
    if reply.success {
        Ok(())
    } else {
        Err(ApiError::Rejected { endpoint })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_wire_format() {
        let args = ClassTagArgs { class_name: "cat", tag_index: 3.to_string(), path: "/data/pets" };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json, serde_json::json!({"className": "cat", "tagIndex": "3", "path": "/data/pets"}));
    }

    #[test]
    fn test_false_flag_is_rejection() {
        assert!(check(SuccessFlag { success: true }, ASSIGN_TAG_TO_CLASS).is_ok());
        match check(SuccessFlag { success: false }, REMOVE_TAG_FROM_CLASS) {
            Err(ApiError::Rejected { endpoint }) => assert_eq!(endpoint, REMOVE_TAG_FROM_CLASS),
            other => panic!("expected rejection, got {:?}", other),
        }
    }
}
