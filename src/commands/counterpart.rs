//! Counterpart Commands
//!
//! Creating a counterpart class in a paired project, optionally copying video tags.

use serde::Serialize;

use super::post;
use crate::error::ApiError;
use crate::models::{CounterpartCreationResult, VideosToCopyTags};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCounterpartArgs {
    pub project_name: String,
    pub original_class_name: String,
    pub counterpart_class_name: String,
    pub videos_to_copy_tags: VideosToCopyTags,
}

/// Post to the caller-supplied `url`; returns where the browser should go next
pub async fn create_counterpart_videos(url: &str, args: &CreateCounterpartArgs) -> Result<String, ApiError> {
    let result: CounterpartCreationResult = post(url, args).await?;
    Ok(result.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_wire_format() {
        let args = CreateCounterpartArgs {
            project_name: "pets".into(),
            original_class_name: "cat".into(),
            counterpart_class_name: "cat_side".into(),
            videos_to_copy_tags: VideosToCopyTags {
                train: vec!["a.mp4".into()],
                valid: vec![],
            },
        };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "projectName": "pets",
                "originalClassName": "cat",
                "counterpartClassName": "cat_side",
                "videosToCopyTags": {"train": ["a.mp4"], "valid": []}
            })
        );
    }
}
