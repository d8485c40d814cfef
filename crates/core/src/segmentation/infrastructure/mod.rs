pub mod color_segmenter;
