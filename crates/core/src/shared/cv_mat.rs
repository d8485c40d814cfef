//! Copies between the crate's pixel buffers and OpenCV matrices.
//!
//! Frames stay RGB inside a `CV_8UC3` matrix; OpenCV never reorders them,
//! so callers pick RGB conversion codes and RGB-ordered `Scalar` colors.

use ndarray::Array2;
use opencv::core::{self, Mat, Scalar, CV_8UC1, CV_8UC3};
use opencv::prelude::*;

use crate::segmentation::domain::mask::Mask;
use crate::shared::frame::Frame;

pub fn frame_to_mat(frame: &Frame) -> opencv::Result<Mat> {
    let mut mat = Mat::new_rows_cols_with_default(
        frame.height() as i32,
        frame.width() as i32,
        CV_8UC3,
        Scalar::all(0.0),
    )?;
    mat.data_bytes_mut()?.copy_from_slice(frame.data());
    Ok(mat)
}

/// Rebuilds a frame from a continuous `CV_8UC3` matrix.
pub fn mat_to_frame(mat: &Mat, index: usize) -> opencv::Result<Frame> {
    require_type(mat, CV_8UC3)?;
    Ok(Frame::new(
        mat.data_bytes()?.to_vec(),
        mat.cols() as u32,
        mat.rows() as u32,
        index,
    ))
}

pub fn mask_to_mat(mask: &Mask) -> opencv::Result<Mat> {
    let mut mat = Mat::new_rows_cols_with_default(
        mask.height() as i32,
        mask.width() as i32,
        CV_8UC1,
        Scalar::all(0.0),
    )?;
    for (dst, &src) in mat.data_bytes_mut()?.iter_mut().zip(mask.as_array().iter()) {
        *dst = src;
    }
    Ok(mat)
}

/// Reads a single-channel 8-bit matrix as a mask.
pub fn mat_to_mask(mat: &Mat) -> opencv::Result<Mask> {
    require_type(mat, CV_8UC1)?;
    let cols = mat.cols() as usize;
    let bytes = mat.data_bytes()?;
    let data = Array2::from_shape_fn((mat.rows() as usize, cols), |(row, col)| {
        bytes[row * cols + col]
    });
    Ok(Mask::from_array(data))
}

fn require_type(mat: &Mat, expected: i32) -> opencv::Result<()> {
    if mat.typ() != expected {
        return Err(opencv::Error::new(
            core::StsUnmatchedFormats,
            format!("expected matrix type {expected}, got {}", mat.typ()),
        ));
    }
    Ok(())
}
