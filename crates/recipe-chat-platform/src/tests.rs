#[cfg(test)]
mod tests {
    use crate::http::payload::*;
    use crate::http::HttpBackend;
    use recipe_chat_types::config::ChatConfig;
    use recipe_chat_types::history::ExchangeRecord;
    use recipe_chat_types::ChatError;

    // ─── Chat Payload Tests ──────────────────────────────────

    #[test]
    fn test_decode_wrapped_reply() {
        let body = r#"{"response": {"text": "Try this stir-fry", "recipes": [{"id": 1, "title": "Stir Fry"}]}}"#;
        let reply = decode_chat_reply(body).unwrap();
        assert_eq!(reply.text.as_deref(), Some("Try this stir-fry"));
        assert_eq!(reply.recipes.unwrap()[0].title, "Stir Fry");
    }

    #[test]
    fn test_decode_wrapped_text_reply() {
        let reply = decode_chat_reply(r#"{"response": "Try a stir-fry"}"#).unwrap();
        assert_eq!(reply.text.as_deref(), Some("Try a stir-fry"));
        assert!(reply.recipes.is_none());
    }

    #[test]
    fn test_decode_bare_reply() {
        let reply = decode_chat_reply(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(reply.text.as_deref(), Some("hello"));
        assert!(reply.recipes.is_none());
    }

    #[test]
    fn test_decode_wrapped_empty_reply() {
        let reply = decode_chat_reply(r#"{"response": {}}"#).unwrap();
        assert!(reply.text.is_none());
        assert!(reply.recipes.is_none());
    }

    #[test]
    fn test_decode_full_recipe_from_service() {
        let body = r#"{"response": {"text": "**1) Garlic Chicken**", "recipes": [{
            "id": 640062,
            "title": "Garlic Chicken",
            "image": null,
            "sourceUrl": null,
            "readyInMinutes": 45,
            "servings": 4,
            "summary": "",
            "ingredients": ["4 chicken thighs"],
            "steps": [],
            "nutrition": {"calories": null, "carbs": "12g", "fat": null, "protein": "40g"},
            "similar": [{"id": 5, "title": "Lemon Chicken"}]
        }]}}"#;
        let recipes = decode_chat_reply(body).unwrap().recipes.unwrap();
        let recipe = &recipes[0];
        assert!(recipe.image.is_none());
        assert_eq!(recipe.servings, Some(4));
        let nutrition = recipe.nutrition.as_ref().unwrap();
        assert!(nutrition.calories.is_none());
        assert_eq!(nutrition.carbs.as_deref(), Some("12g"));
        assert_eq!(recipe.similar.len(), 1);
    }

    #[test]
    fn test_decode_reply_invalid_json() {
        assert!(matches!(decode_chat_reply("<html>"), Err(ChatError::Decode(_))));
    }

    #[test]
    fn test_decode_reply_wrong_shape() {
        assert!(matches!(
            decode_chat_reply(r#"{"text": 42}"#),
            Err(ChatError::Decode(_))
        ));
        assert!(matches!(decode_chat_reply(r#""just text""#), Err(ChatError::Decode(_))));
    }

    // ─── History Payload Tests ───────────────────────────────

    #[test]
    fn test_decode_history() {
        let body = r#"[
            {"id": 1, "user_id": "anonymous", "user_message": "A", "bot_response": "B"},
            {"id": 2, "user_id": "anonymous", "user_message": "C", "bot_response": "D"}
        ]"#;
        let records = decode_history(body).unwrap();
        assert_eq!(
            records,
            vec![ExchangeRecord::new("A", "B"), ExchangeRecord::new("C", "D")]
        );
    }

    #[test]
    fn test_decode_history_empty() {
        assert!(decode_history("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_history_malformed() {
        assert!(decode_history(r#"{"detail": "Not Found"}"#).is_err());
    }

    // ─── URL Tests ───────────────────────────────────────────

    #[test]
    fn test_backend_chat_url_trims_slash() {
        let mut config = ChatConfig::default();
        config.api_base = "https://chef.example/api/".to_string();
        let backend = HttpBackend::new(&config);
        assert_eq!(backend.chat_url(), "https://chef.example/api/chat");
    }
}
