//! The contact sheet: every object of the directory stacked on one image, with a few annotations to tell them apart.
//!
//! Each object gets a row band as tall as the object. Inside the band the object is drawn at the left edge and the distinct
//! colours of its lookup table are drawn as a one pixel high strip further to the right. Every few objects the band is labelled
//! with the object's position on the sheet.

use crate::characters::render_characters;
use crate::codec::decode_pixel;
use crate::context::DecodeContext;
use crate::directory::{sort_by_lookup_table, VisualObject};
use crate::error::DecodeError;
use crate::font::stamp_number;
use crate::palette::BASE_COLOR_COUNT;
use crate::render::render_object;
use art_extractor_core::color::{Color, Palette, PaletteIndex};
use art_extractor_core::geom::{Point, Rect, Size};
use art_extractor_core::surface::{GenericSurface, Surface};
use itertools::Itertools;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Where the annotations go on the sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    pub width: u32,
    /// The column at which the lookup table colours start.
    pub swatch_x: u32,
    pub label_x: u32,
    /// Only every `label_interval`-th object gets a label. Zero disables labels.
    pub label_interval: usize,
    /// The top-left corner of the strip showing the base colours as 2x2 blocks.
    pub palette_strip_origin: Point,
    pub characters_origin: Point,
    pub label_foreground: PaletteIndex,
    pub label_background: PaletteIndex,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            width: 640,
            swatch_x: 38,
            label_x: 30,
            label_interval: 5,
            palette_strip_origin: Point::new(80, 4),
            characters_origin: Point::new(80, 8),
            label_foreground: PaletteIndex::new(7),
            label_background: PaletteIndex::new(0),
        }
    }
}

/// Where an object ended up on the sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SheetEntry {
    /// The position in the sorted order. This is the number the labels show.
    pub position: usize,
    pub origin: Point,
    pub object: VisualObject,
}

/// A rendered contact sheet.
#[derive(Clone, Debug)]
pub struct ContactSheet {
    pub surface: GenericSurface<Color>,
    pub entries: Vec<SheetEntry>,
}

/// Lays out and renders a contact sheet.
///
/// The objects are sorted by lookup table first. Directory order is kept among objects that share a table.
///
/// # Errors
/// * [`DecodeError::UnknownPaletteIndex`] if a label colour of `layout` is not in the palette.
/// * Any error of [`render_object`] or of the character rendering.
///
/// No partial sheet is returned.
pub fn compose(
    ctx: &DecodeContext,
    mut objects: Vec<VisualObject>,
    layout: &SheetLayout,
) -> Result<ContactSheet, DecodeError> {
    sort_by_lookup_table(&mut objects);

    let height: u32 = objects.iter().map(|object| u32::from(object.height_in_rows)).sum();
    info!("Total image height {}", height);
    if objects.is_empty() {
        warn!("No objects to place, the sheet is empty");
    }

    let palette = ctx.palette();
    let label_colors = (
        palette_color(palette, layout.label_foreground)?,
        palette_color(palette, layout.label_background)?,
    );
    let mut surface = GenericSurface::new(Size::new(layout.width, height), palette[PaletteIndex::new(0)]);

    let mut entries = Vec::with_capacity(objects.len());
    let mut y = 0;
    for (position, object) in objects.into_iter().enumerate() {
        let origin = Point::new(0, y);
        debug!("Placing #{} ({}) at y {}", position, object, y);
        paint_swatch(&mut surface, ctx, object.lookup_table_index, Point::new(layout.swatch_x, y))?;
        render_object(&mut surface, ctx, &object, origin)?;
        entries.push(SheetEntry {
            position,
            origin,
            object,
        });
        y += u32::from(object.height_in_rows);
    }

    if layout.label_interval > 0 {
        let (foreground, background) = label_colors;
        for entry in entries.iter().filter(|entry| entry.position % layout.label_interval == 0) {
            let origin = Point::new(layout.label_x, entry.origin.y);
            stamp_number(&mut surface, entry.position, origin, foreground, background);
        }
    }

    paint_palette_strip(&mut surface, ctx, layout.palette_strip_origin);
    render_characters(&mut surface, ctx, &ctx.format().character_columns, layout.characters_origin)?;

    Ok(ContactSheet { surface, entries })
}

/// Resolves a palette index taken from the layout, which may come from a user supplied format file.
fn palette_color(palette: &Palette, index: PaletteIndex) -> Result<Color, DecodeError> {
    palette.get(index).ok_or(DecodeError::UnknownPaletteIndex {
        index: index.value(),
        len: palette.len(),
    })
}

/// Paints the distinct colours that the entries of a lookup table decode to, left to right in order of first appearance.
fn paint_swatch(
    target: &mut impl Surface<DataType = Color>,
    ctx: &DecodeContext,
    table_index: u8,
    origin: Point,
) -> Result<(), DecodeError> {
    let palette = ctx.palette();
    let colors = ctx
        .tables()
        .table(table_index)?
        .iter()
        .flat_map(|&byte| {
            let (left, right) = decode_pixel(byte);
            [palette[left], palette[right]]
        })
        .unique();
    for (x, color) in (origin.x..).zip(colors) {
        target.set_pixel(Point::new(x, origin.y), color);
    }
    Ok(())
}

/// Paints the base colours as 2x2 blocks, left to right.
fn paint_palette_strip(target: &mut impl Surface<DataType = Color>, ctx: &DecodeContext, origin: Point) {
    for (index, color) in ctx.palette().iter().take(BASE_COLOR_COUNT) {
        let x = origin.x + u32::from(index.value()) * 2;
        target.fill_rect(Rect::new(Point::new(x, origin.y), Size::new(2, 2)), *color);
    }
}
