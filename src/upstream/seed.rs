//! Sample records inserted once at startup
//!
//! Seeding is best-effort and idempotence is delegated to the upstream; the
//! gateway never updates or deletes records afterwards.

use crate::upstream::records::ToolRecord;

/// The three sample tools the catalog ships with
pub fn sample_tools() -> Vec<ToolRecord> {
    vec![
        ToolRecord {
            name: "ChatGPT".to_string(),
            description: "Advanced conversational AI from OpenAI for answering questions, \
                          writing and programming."
                .to_string(),
            url: "https://chat.openai.com".to_string(),
            category: "text_generation".to_string(),
            rating: Some(4.9),
            is_free: true,
            is_featured: Some(true),
            language_support: Some("zh,en,ja,ko".to_string()),
            tags: Some("chat,gpt,llm".to_string()),
        },
        ToolRecord {
            name: "Midjourney".to_string(),
            description: "Industry-leading AI image generator that turns short text prompts \
                          into striking artwork."
                .to_string(),
            url: "https://www.midjourney.com".to_string(),
            category: "image_generation".to_string(),
            rating: Some(4.9),
            is_free: false,
            is_featured: Some(true),
            language_support: Some("en".to_string()),
            tags: Some("image,art,generation".to_string()),
        },
        ToolRecord {
            name: "Tongyi Qianwen".to_string(),
            description: "Large language model developed by Alibaba's Tongyi Lab, with strong \
                          Chinese-language support."
                .to_string(),
            url: "https://tongyi.aliyun.com".to_string(),
            category: "text_generation".to_string(),
            rating: Some(4.8),
            is_free: true,
            is_featured: Some(true),
            language_support: Some("zh,en".to_string()),
            tags: Some("chinese,llm,chat".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_categories() {
        let tools = sample_tools();
        assert_eq!(tools.len(), 3);

        let text: Vec<&str> = tools
            .iter()
            .filter(|t| t.category == "text_generation")
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(text, ["ChatGPT", "Tongyi Qianwen"]);

        let image: Vec<&str> = tools
            .iter()
            .filter(|t| t.category == "image_generation")
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(image, ["Midjourney"]);
    }

    #[test]
    fn test_samples_have_required_fields() {
        for tool in sample_tools() {
            assert!(!tool.name.is_empty());
            assert!(!tool.description.is_empty());
            assert!(tool.url.starts_with("https://"));
            assert!(!tool.category.is_empty());
        }
    }
}
