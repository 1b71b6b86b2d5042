//! Header area geometry.
//!
//! Everything here works in header-area local space: x runs along the strip,
//! y across it, and the side rotation is applied afterwards by the pane.
//! Headers are positioned inside the headers region, whose origin is the
//! region rect's top-left corner.

use tabstrip_core::geometry::{Insets, Rect, Size, bounded_size, sanitize_extent, snap_size};
use tabstrip_core::profiling::profile_function;

use crate::config::{ScrollBarPlacement, Side};
use crate::header::HeaderCollection;
use crate::tab::TabId;

/// Size constraints of an auxiliary region (first, sticky or last area).
///
/// The host sets these from whatever it places in the region; the engine
/// only needs the bounded size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxArea {
    pub min: Size<f32>,
    pub pref: Size<f32>,
    pub max: Size<f32>,
}

impl Default for AuxArea {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl AuxArea {
    pub const EMPTY: Self = AuxArea {
        min: Size::ZERO,
        pref: Size::ZERO,
        max: Size {
            width: f32::MAX,
            height: f32::MAX,
        },
    };

    /// A region that wants exactly `width` x `height`.
    pub fn fixed(width: f32, height: f32) -> Self {
        let size = Size::new(width, height);
        Self {
            min: size,
            pref: size,
            max: size,
        }
        .sanitized()
    }

    pub fn sanitized(self) -> Self {
        let max = |v: f32| {
            if v.is_nan() {
                f32::MAX
            } else {
                v.max(0.0)
            }
        };
        Self {
            min: self.min.sanitized(),
            pref: self.pref.sanitized(),
            max: Size::new(max(self.max.width), max(self.max.height)),
        }
    }

    /// Bounded, snapped width.
    pub fn width(&self) -> f32 {
        snap_size(bounded_size(self.min.width, self.pref.width, self.max.width))
    }

    /// Bounded, snapped height.
    pub fn height(&self) -> f32 {
        snap_size(bounded_size(self.min.height, self.pref.height, self.max.height))
    }
}

/// Scrollbar placement inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBarSpec {
    pub placement: ScrollBarPlacement,
    pub stick_to_edge: bool,
    pub thickness: f32,
}

/// Inputs for one header-area layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaInput {
    pub side: Side,
    /// Header area length along the strip.
    pub width: f32,
    /// Header area thickness.
    pub height: f32,
    pub insets: Insets,
    pub first: AuxArea,
    pub sticky: AuxArea,
    pub last: AuxArea,
    /// Preferred width of the headers, closing ones excluded.
    pub headers_width: f32,
    /// Preferred width of the headers, closing ones included.
    pub headers_width_with_closing: f32,
    pub headers_height: f32,
    pub placeholder: bool,
    pub scrollbar: Option<ScrollBarSpec>,
}

/// Computed rectangles of one header area, in header-area local space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderAreaLayout {
    pub first: Rect<f32>,
    pub region: Rect<f32>,
    pub sticky: Rect<f32>,
    pub last: Rect<f32>,
    pub scrollbar: Option<Rect<f32>>,
    /// Viewport of the headers region, in region coordinates.
    pub clip: Rect<f32>,
    /// Width available to headers once the aux areas and indents are taken.
    pub visible_width: f32,
    pub fits: bool,
}

impl HeaderAreaLayout {
    /// Whether header-area local `x` lies over the headers viewport.
    pub fn is_over_clip(&self, side: Side, x: f32) -> bool {
        match side {
            Side::Top | Side::Right => x >= self.first.max_x() && x <= self.sticky.x,
            Side::Bottom | Side::Left => x >= self.sticky.max_x() && x <= self.first.x,
        }
    }
}

/// Leading and trailing insets along the strip.
pub fn tab_indents(side: Side, insets: &Insets) -> (f32, f32) {
    if side.is_horizontal() {
        (insets.left, insets.right)
    } else {
        (insets.top, insets.bottom)
    }
}

/// Whether every header fits next to the aux areas.
pub fn tabs_fit(input: &AreaInput) -> bool {
    let (leading, trailing) = tab_indents(input.side, &input.insets);
    let needed = leading
        + input.first.width()
        + input.headers_width
        + input.sticky.width()
        + input.last.width()
        + trailing;
    needed < input.width
}

/// Width left for headers after aux areas and indents.
pub fn visible_width(input: &AreaInput) -> f32 {
    let (leading, trailing) = tab_indents(input.side, &input.insets);
    (snap_size(input.width)
        - input.first.width()
        - input.sticky.width()
        - input.last.width()
        - leading
        - trailing)
        .max(0.0)
}

/// Clip rectangle of the headers region.
///
/// Regions built from the far edge keep their far end in view, so the clip
/// starts at `headers_width - visible` once headers overflow.
pub fn header_clip(input: &AreaInput) -> Rect<f32> {
    let max_width = visible_width(input);
    let headers = input.headers_width_with_closing;
    let height = input.headers_height;
    if input.side.builds_from_end() {
        if headers < max_width {
            Rect::new(0.0, 0.0, headers, height)
        } else {
            Rect::new(headers - max_width, 0.0, max_width, height)
        }
    } else {
        Rect::new(0.0, 0.0, headers.min(max_width), height)
    }
}

/// Position the aux areas, the headers region and the scrollbar.
pub fn layout_area(input: &AreaInput) -> HeaderAreaLayout {
    profile_function!();

    let Insets {
        top,
        right,
        bottom,
        left,
    } = input.insets;
    let header_width = snap_size(sanitize_extent(input.width));
    let header_height = snap_size(sanitize_extent(input.height));
    let horizontal = input.side.is_horizontal();

    let w = header_width - if horizontal { left + right } else { top + bottom };
    let h = header_height - if horizontal { top + bottom } else { left + right };
    let background_height = header_height;
    let regions_width = input.headers_width;
    let regions_height = input.headers_height;

    let first_width = input.first.width();
    let first_height = input.first.height().max(h);
    let sticky_width = input.sticky.width();
    let sticky_height = input.sticky.height().max(h);
    let last_width = input.last.width();
    let last_height = input.last.height().max(h);

    let (scrollbar_width, scrollbar_height) = match input.scrollbar {
        Some(spec) => (
            (w - first_width - sticky_width - last_width).max(0.0),
            snap_size(spec.thickness),
        ),
        None => (0.0, 0.0),
    };

    let fits = tabs_fit(input);
    let sticky_after = |region_x: f32, last_x: f32| {
        if input.placeholder {
            region_x
        } else if fits {
            region_x + regions_width
        } else {
            last_x - sticky_width
        }
    };
    let sticky_before = |region_x: f32, last_x: f32| {
        if input.placeholder {
            region_x
        } else if fits {
            region_x - sticky_width
        } else {
            last_x + last_width
        }
    };
    let above = |spec: &ScrollBarSpec| spec.placement == ScrollBarPlacement::AboveTabs;

    let first_x;
    let area_y;
    let region_x;
    let region_y;
    let sticky_x;
    let last_x;
    let scrollbar_x;
    let scrollbar_y;
    match input.side {
        Side::Top => {
            first_x = left;
            area_y = top;
            region_x = first_x + first_width;
            region_y = background_height - regions_height - bottom;
            last_x = w - last_width + left;
            sticky_x = sticky_after(region_x, last_x);
            scrollbar_x = region_x;
            scrollbar_y = match input.scrollbar {
                Some(spec) if above(&spec) => {
                    if spec.stick_to_edge {
                        0.0
                    } else {
                        top
                    }
                }
                Some(spec) if spec.stick_to_edge => header_height - scrollbar_height,
                Some(_) => top + first_height - scrollbar_height,
                None => 0.0,
            };
        }
        Side::Right => {
            first_x = top;
            area_y = background_height - first_height - left;
            region_x = first_x + first_width;
            region_y = background_height - regions_height - left;
            last_x = w - last_width + top;
            sticky_x = sticky_after(region_x, last_x);
            scrollbar_x = region_x;
            scrollbar_y = match input.scrollbar {
                Some(spec) if above(&spec) => {
                    if spec.stick_to_edge {
                        0.0
                    } else {
                        right
                    }
                }
                Some(spec) if spec.stick_to_edge => header_height - scrollbar_height,
                Some(_) => header_height - left - scrollbar_height,
                None => 0.0,
            };
        }
        Side::Bottom => {
            first_x = header_width - first_width - left;
            area_y = background_height - first_height - top;
            region_x = header_width - regions_width - first_width - left;
            region_y = background_height - regions_height - top;
            last_x = right;
            sticky_x = sticky_before(region_x, last_x);
            scrollbar_x = last_x + last_width + sticky_width;
            scrollbar_y = match input.scrollbar {
                Some(spec) if above(&spec) => {
                    if spec.stick_to_edge {
                        background_height - scrollbar_height
                    } else {
                        background_height - scrollbar_height - top
                    }
                }
                Some(spec) if spec.stick_to_edge => 0.0,
                Some(_) => top,
                None => 0.0,
            };
        }
        Side::Left => {
            first_x = header_width - first_width - top;
            area_y = background_height - first_height - right;
            region_x = header_width - regions_width - first_width - top;
            region_y = background_height - regions_height - right;
            last_x = bottom;
            sticky_x = sticky_before(region_x, last_x);
            scrollbar_x = first_x - scrollbar_width;
            scrollbar_y = match input.scrollbar {
                Some(spec) if above(&spec) => {
                    if spec.stick_to_edge {
                        0.0
                    } else {
                        left
                    }
                }
                Some(spec) if spec.stick_to_edge => header_height - scrollbar_height,
                Some(_) => header_height - scrollbar_height - right,
                None => 0.0,
            };
        }
    }

    HeaderAreaLayout {
        first: Rect::new(first_x, area_y, first_width, first_height),
        region: Rect::new(region_x, region_y, regions_width, regions_height),
        sticky: Rect::new(sticky_x, area_y, sticky_width, sticky_height),
        last: Rect::new(last_x, area_y, last_width, last_height),
        scrollbar: input
            .scrollbar
            .map(|_| Rect::new(scrollbar_x, scrollbar_y, scrollbar_width, scrollbar_height)),
        clip: header_clip(input),
        visible_width: visible_width(input),
        fits,
    }
}

/// Preferred header-area size as (length along the strip, thickness).
pub fn area_pref_size(input: &AreaInput) -> Size<f32> {
    let horizontal = input.side.is_horizontal();
    let insets = input.insets;
    let along = if horizontal {
        insets.horizontal()
    } else {
        insets.vertical()
    };
    let across = if horizontal {
        insets.vertical()
    } else {
        insets.horizontal()
    };
    let length = input.first.width()
        + input.headers_width
        + input.sticky.width()
        + input.last.width()
        + along;
    let thickness = input
        .first
        .height()
        .max(input.last.height())
        .max(input.sticky.height())
        .max(input.headers_height)
        + across;
    Size::new(length, thickness)
}

/// Size and position every header inside the headers region.
///
/// Headers are built from the region start (TOP, RIGHT) or from its far
/// edge (BOTTOM, LEFT), shifted by `offset`. Each gets its preferred width
/// times its open/close scale. Headers for which `skip` returns true are
/// sized but keep their position; the drag gesture moves them itself.
pub fn place_headers(
    headers: &mut HeaderCollection,
    side: Side,
    region_width: f32,
    offset: f32,
    skip: impl Fn(TabId) -> bool,
) {
    profile_function!();

    let background_height = headers.pref_height();
    let from_end = side.builds_from_end();
    let mut tab_x = if from_end {
        snap_size(region_width) - offset
    } else {
        offset
    };

    for header in headers.iter_mut() {
        let width = snap_size(header.pref_width() * header.scale());
        let height = snap_size(header.pref_height());
        header.resize(width, height);

        let start_y = if side == Side::Bottom {
            0.0
        } else {
            background_height - height
        };
        let pinned = !header.is_placeholder() && skip(header.id());
        if from_end {
            tab_x -= width;
            if !pinned {
                header.relocate(tab_x, start_y);
            }
        } else {
            if !pinned {
                header.relocate(tab_x, start_y);
            }
            tab_x += width;
        }
    }
}
