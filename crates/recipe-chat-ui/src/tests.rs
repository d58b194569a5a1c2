#[cfg(test)]
mod tests {
    use crate::markdown::*;
    use crate::panels::recipe_card::{image_uri, meta_line, MAX_INGREDIENTS, MAX_STEPS};
    use crate::state::*;
    use recipe_chat_types::event::SessionEvent;
    use recipe_chat_types::message::TranscriptEntry;
    use recipe_chat_types::recipe::Recipe;

    fn appended(index: usize, entry: TranscriptEntry) -> SessionEvent {
        SessionEvent::EntryAppended { index, entry }
    }

    fn plain(text: &str) -> Span {
        Span { text: text.to_string(), style: SpanStyle::default() }
    }

    fn strong(text: &str) -> Span {
        Span {
            text: text.to_string(),
            style: SpanStyle { strong: true, ..SpanStyle::default() },
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.entries.is_empty());
        assert!(!state.is_busy());
        assert!(state.loading_history);
        assert!(!state.input_enabled());
        assert_eq!(state.status_text, "Loading history...");
    }

    #[test]
    fn test_ui_state_history_loaded_empty() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::HistoryLoaded { exchanges: 0 }]);
        assert!(!state.loading_history);
        assert!(state.input_enabled());
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_history_loaded_restores_entries() {
        let mut state = UiState::new();
        state.process_events(vec![
            appended(0, TranscriptEntry::user("A")),
            appended(1, TranscriptEntry::assistant("B")),
            SessionEvent::HistoryLoaded { exchanges: 1 },
        ]);
        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.entries[1].text, "B");
        assert_eq!(state.status_text, "Restored 1 earlier exchanges");
        assert!(state.scroll_to_bottom);
    }

    #[test]
    fn test_ui_state_turn_lifecycle() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::HistoryLoaded { exchanges: 0 }]);

        state.process_events(vec![
            appended(0, TranscriptEntry::user("pasta")),
            SessionEvent::BusyChanged { busy: true },
            SessionEvent::TurnStarted { turn_id: 1 },
        ]);
        assert!(state.is_busy());
        assert!(!state.input_enabled());
        assert_eq!(state.status_text, "Cooking up ideas...");

        state.process_events(vec![
            appended(1, TranscriptEntry::assistant("Try carbonara")),
            SessionEvent::BusyChanged { busy: false },
            SessionEvent::TurnSettled { turn_id: 1, success: true },
        ]);
        assert!(!state.is_busy());
        assert!(state.input_enabled());
        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_failed_turn_status() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::TurnSettled { turn_id: 3, success: false }]);
        assert_eq!(state.status_text, "Last request failed");
        assert!(state.last_turn_failed);

        state.process_events(vec![SessionEvent::TurnSettled { turn_id: 4, success: true }]);
        assert!(!state.last_turn_failed);
    }

    #[test]
    fn test_ui_state_skips_out_of_order_entry() {
        let mut state = UiState::new();
        state.process_events(vec![appended(2, TranscriptEntry::user("late"))]);
        assert!(state.entries.is_empty());
        assert!(!state.scroll_to_bottom);
    }

    #[test]
    fn test_take_input_trims_and_clears() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::HistoryLoaded { exchanges: 0 }]);
        state.input_text = "  chicken broccoli  ".to_string();
        assert!(state.can_send());
        assert_eq!(state.take_input().as_deref(), Some("chicken broccoli"));
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_take_input_refuses_blank() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::HistoryLoaded { exchanges: 0 }]);
        state.input_text = "   ".to_string();
        assert!(!state.can_send());
        assert!(state.take_input().is_none());
        assert_eq!(state.input_text, "   ");
    }

    #[test]
    fn test_take_input_refuses_while_busy() {
        let mut state = UiState::new();
        state.process_events(vec![
            SessionEvent::HistoryLoaded { exchanges: 0 },
            SessionEvent::BusyChanged { busy: true },
        ]);
        state.input_text = "soup".to_string();
        assert!(state.take_input().is_none());
        assert_eq!(state.input_text, "soup");
    }

    // ─── Markdown Tests ──────────────────────────────────────

    #[test]
    fn test_markdown_plain_paragraph() {
        assert_eq!(
            parse_markdown("Try this stir-fry"),
            vec![Block::Paragraph(vec![plain("Try this stir-fry")])]
        );
    }

    #[test]
    fn test_markdown_bold_title_with_soft_break() {
        let blocks = parse_markdown("**Garlic Chicken**\nA quick dish.");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                strong("Garlic Chicken"),
                plain(" A quick dish."),
            ])]
        );
    }

    #[test]
    fn test_markdown_heading_and_bullets() {
        let blocks = parse_markdown("### Ingredients\n- 2 eggs\n- 1 cup flour");
        assert_eq!(
            blocks,
            vec![
                Block::Heading { level: 3, spans: vec![plain("Ingredients")] },
                Block::ListItem { depth: 0, marker: "•".to_string(), spans: vec![plain("2 eggs")] },
                Block::ListItem {
                    depth: 0,
                    marker: "•".to_string(),
                    spans: vec![plain("1 cup flour")],
                },
            ]
        );
    }

    #[test]
    fn test_markdown_ordered_markers() {
        let blocks = parse_markdown("1. Boil\n2. Serve");
        let markers: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::ListItem { marker, .. } => Some(marker.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(markers, vec!["1.", "2."]);
    }

    #[test]
    fn test_markdown_nested_list_depth() {
        let blocks = parse_markdown("- a\n  - b");
        assert_eq!(
            blocks,
            vec![
                Block::ListItem { depth: 0, marker: "•".to_string(), spans: vec![plain("a")] },
                Block::ListItem { depth: 1, marker: "•".to_string(), spans: vec![plain("b")] },
            ]
        );
    }

    #[test]
    fn test_markdown_link_span() {
        let blocks = parse_markdown("[View recipe](https://example.com/r/1)");
        let Block::Paragraph(spans) = &blocks[0] else {
            panic!("expected paragraph, got {:?}", blocks[0]);
        };
        assert_eq!(spans[0].text, "View recipe");
        assert_eq!(spans[0].style.link.as_deref(), Some("https://example.com/r/1"));
    }

    #[test]
    fn test_markdown_empty_source() {
        assert!(parse_markdown("").is_empty());
    }

    // ─── Recipe Card Tests ───────────────────────────────────

    #[test]
    fn test_meta_line() {
        let mut recipe = Recipe::new(1, "Soup");
        assert!(meta_line(&recipe).is_none());

        recipe.ready_in_minutes = Some(35);
        assert_eq!(meta_line(&recipe).as_deref(), Some("35 min"));

        recipe.servings = Some(4);
        assert_eq!(meta_line(&recipe).as_deref(), Some("35 min · serves 4"));
    }

    #[test]
    fn test_image_uri() {
        let mut recipe = Recipe::new(1, "Soup");
        assert!(image_uri(&recipe).is_none());

        recipe.image = Some("  ".to_string());
        assert!(image_uri(&recipe).is_none());

        recipe.image = Some("https://img.spoonacular.com/recipes/1-556x370.jpg".to_string());
        assert_eq!(
            image_uri(&recipe),
            Some("https://img.spoonacular.com/recipes/1-556x370.jpg")
        );
    }

    #[test]
    fn test_card_limits() {
        assert_eq!(MAX_INGREDIENTS, 10);
        assert_eq!(MAX_STEPS, 5);
    }
}
