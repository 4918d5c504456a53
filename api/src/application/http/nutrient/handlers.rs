pub mod analyze_nutrients;
