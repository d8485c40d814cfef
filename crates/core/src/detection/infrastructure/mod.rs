pub mod largest_contour_locator;
