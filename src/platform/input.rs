//! Paddle control sources
//!
//! The simulation only ever sees a target X in canvas space. Where that comes
//! from (mouse, touch, a face tracker watching a webcam) is hidden behind
//! `PaddleControl`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Something that can steer the paddle
pub trait PaddleControl {
    /// Target paddle center X for this frame, or `None` to hold position
    fn current_target_x(&mut self) -> Option<f32>;
}

/// Mouse/touch pointer over the canvas
#[derive(Debug, Clone, Default)]
pub struct PointerControl {
    /// Left edge of the canvas in client coordinates
    canvas_left: f32,
    last_x: Option<f32>,
}

impl PointerControl {
    pub fn new(canvas_left: f32) -> Self {
        Self {
            canvas_left,
            last_x: None,
        }
    }

    /// Canvas moved within the page
    pub fn set_canvas_left(&mut self, canvas_left: f32) {
        self.canvas_left = canvas_left;
    }

    /// Pointer moved, in client coordinates
    pub fn on_pointer_move(&mut self, client_x: f32) {
        self.last_x = Some(client_x - self.canvas_left);
    }
}

impl PaddleControl for PointerControl {
    fn current_target_x(&mut self) -> Option<f32> {
        self.last_x
    }
}

/// A face detection in video-frame pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FaceRect {
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Paddle steered by head position from a face tracker
///
/// Detections arrive at the tracker's own rate, which is usually slower than
/// the frame rate. Frames without a fresh detection report `None` so the
/// paddle holds still instead of waiting.
#[derive(Debug, Clone)]
pub struct VisionControl {
    frame_width: f32,
    canvas_width: f32,
    /// Flip horizontally so moving your head left moves the paddle left
    mirror: bool,
    /// 0 = jump straight to each detection, towards 1 = heavier smoothing
    smoothing: f32,
    smoothed_x: Option<f32>,
    pending: Option<f32>,
}

impl VisionControl {
    /// Both widths must be positive and finite, or every target would be NaN
    pub fn new(frame_width: f32, canvas_width: f32) -> Result<Self, ConfigError> {
        for (name, value) in [("frame_width", frame_width), ("canvas_width", canvas_width)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        Ok(Self {
            frame_width,
            canvas_width,
            mirror: true,
            smoothing: 0.0,
            smoothed_x: None,
            pending: None,
        })
    }

    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing.clamp(0.0, 0.99);
        self
    }

    /// Map a face center in the video frame to canvas X
    pub fn frame_to_canvas_x(&self, frame_x: f32) -> f32 {
        let t = (frame_x / self.frame_width).clamp(0.0, 1.0);
        let t = if self.mirror { 1.0 - t } else { t };
        t * self.canvas_width
    }

    /// Feed the largest face found in the latest video frame
    pub fn on_face_detected(&mut self, face: FaceRect) {
        let target = self.frame_to_canvas_x(face.center_x());
        let x = match self.smoothed_x {
            Some(prev) => prev + (target - prev) * (1.0 - self.smoothing),
            None => target,
        };
        self.smoothed_x = Some(x);
        self.pending = Some(x);
    }
}

impl PaddleControl for VisionControl {
    fn current_target_x(&mut self) -> Option<f32> {
        self.pending.take()
    }
}
