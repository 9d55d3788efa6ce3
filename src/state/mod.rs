pub mod input_modality;
pub mod scroll_state;
