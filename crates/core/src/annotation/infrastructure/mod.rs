pub mod trail_annotator;
