// src/viewer/lightbox.rs

pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 3.0;
pub const WHEEL_SENSITIVITY: f64 = 0.01;

/// Which photo the lightbox shows: a canonical listing position and a photo
/// position within that listing's (filtered) carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoRef {
    pub listing: usize,
    pub photo: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    /// Pan is inert visually, clicking the image closes.
    OpenAtScaleOne,
    /// Pan is active, clicking the image does nothing.
    OpenZoomed,
}

/// Container size, a step function of scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalSize {
    Small,
    Medium,
    FullBleed,
}

impl ModalSize {
    pub fn for_scale(scale: f64) -> Self {
        if scale <= 1.0 {
            ModalSize::Small
        } else if scale <= 2.0 {
            ModalSize::Medium
        } else {
            ModalSize::FullBleed
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ModalSize::Small => "modal-sm",
            ModalSize::Medium => "modal-lg",
            ModalSize::FullBleed => "modal-fullscreen",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Snapshot taken when a two-finger touch begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pinch {
    pub initial_distance: f64,
    pub initial_scale: f64,
}

/// The zoom/pan numeric model of the image overlay.
///
/// Every gesture handler runs to completion and leaves the model in a
/// consistent state; the state and modal size are derived, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Lightbox {
    photo: Option<PhotoRef>,
    scale: f64,
    offset: Point,
    pinch: Option<Pinch>,
    last_touch: Option<Point>,
}

impl Default for Lightbox {
    fn default() -> Self {
        Self {
            photo: None,
            scale: MIN_SCALE,
            offset: Point::default(),
            pinch: None,
            last_touch: None,
        }
    }
}

impl Lightbox {
    pub fn closed() -> Self {
        Self::default()
    }

    /// Rebuilds an open lightbox from state carried by the client between events.
    /// Scale is clamped; everything else is taken as given.
    pub fn restore(
        photo: PhotoRef,
        scale: f64,
        offset: Point,
        pinch: Option<Pinch>,
        last_touch: Option<Point>,
    ) -> Self {
        Self {
            photo: Some(photo),
            scale: clamp_scale(scale),
            offset,
            pinch,
            last_touch,
        }
    }

    pub fn photo(&self) -> Option<PhotoRef> {
        self.photo
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn pinch(&self) -> Option<Pinch> {
        self.pinch
    }

    pub fn last_touch(&self) -> Option<Point> {
        self.last_touch
    }

    pub fn is_open(&self) -> bool {
        self.photo.is_some()
    }

    pub fn state(&self) -> LightboxState {
        match self.photo {
            None => LightboxState::Closed,
            Some(_) if self.scale > MIN_SCALE => LightboxState::OpenZoomed,
            Some(_) => LightboxState::OpenAtScaleOne,
        }
    }

    pub fn modal_size(&self) -> ModalSize {
        ModalSize::for_scale(self.scale)
    }

    /// Thumbnail click: show `photo` at scale 1 with no pan.
    pub fn open(&mut self, photo: PhotoRef) {
        *self = Self {
            photo: Some(photo),
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn wheel(&mut self, delta_y: f64) {
        if !self.is_open() {
            return;
        }
        self.scale = clamp_scale(self.scale - delta_y * WHEEL_SENSITIVITY);
    }

    pub fn pinch_start(&mut self, distance: f64) {
        if !self.is_open() {
            return;
        }
        self.pinch = Some(Pinch {
            initial_distance: distance,
            initial_scale: self.scale,
        });
        self.last_touch = None;
    }

    /// Scales the scale captured at pinch start by the finger distance ratio.
    pub fn pinch_move(&mut self, distance: f64) {
        let Some(pinch) = self.pinch.filter(|_| self.is_open()) else {
            return;
        };
        if pinch.initial_distance <= 0.0 || !distance.is_finite() {
            return;
        }
        self.scale = clamp_scale(pinch.initial_scale * (distance / pinch.initial_distance));
    }

    pub fn drag_start(&mut self, at: Point) {
        if !self.is_open() {
            return;
        }
        self.pinch = None;
        self.last_touch = Some(at);
    }

    /// Adds the finger delta since the previous touch event to the pan offset.
    /// The offset is not bounded by the image.
    pub fn drag_move(&mut self, at: Point) {
        if !self.is_open() {
            return;
        }
        if let Some(last) = self.last_touch {
            self.offset.x += at.x - last.x;
            self.offset.y += at.y - last.y;
        }
        self.last_touch = Some(at);
    }

    pub fn touch_end(&mut self) {
        self.pinch = None;
        self.last_touch = None;
    }

    /// Click on the image. Closes only at scale 1; returns whether it closed.
    pub fn click(&mut self) -> bool {
        match self.state() {
            LightboxState::OpenAtScaleOne => {
                self.close();
                true
            }
            LightboxState::OpenZoomed | LightboxState::Closed => false,
        }
    }
}

fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return MIN_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
