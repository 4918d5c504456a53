pub mod analyze_label_image;
pub mod analyze_label_text;
