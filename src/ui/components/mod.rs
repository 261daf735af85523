pub mod difficulty_bar;
pub mod question_panel;
pub mod transcript_view;
