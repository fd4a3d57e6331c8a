pub mod character_form;
pub mod character_list;
pub mod passage;
pub mod story_options;
pub mod story_stage;
