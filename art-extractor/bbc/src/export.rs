//! Writing results to disk.

use anyhow::{anyhow, bail, Context, Result};
use art_extractor_core::color::Color;
use art_extractor_core::surface::Surface;
use log::{error, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encodes a surface as an 8-bit RGB PNG.
///
/// # Errors
/// If the surface has no pixels (PNG does not allow empty images) or if writing fails.
pub fn write_png(surface: &impl Surface<DataType = Color>, writer: impl Write) -> Result<()> {
    let size = surface.size();
    if size.width == 0 || size.height == 0 {
        bail!("Can not encode an empty image of {}x{}", size.width, size.height);
    }

    let mut encoder = png::Encoder::new(writer, size.width, size.height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().context("Could not write PNG header")?;

    let bytes: Vec<u8> = surface
        .data()
        .iter()
        .flat_map(|color| [color.r, color.g, color.b])
        .collect();
    writer.write_image_data(&bytes).context("Could not write PNG data")?;
    writer.finish().context("Could not finish PNG")?;
    Ok(())
}

/// Writes a surface to a PNG file, creating missing parent directories.
pub fn save_png(surface: &impl Surface<DataType = Color>, path: &Path) -> Result<()> {
    create_parent(path)?;
    let file = File::create(path).with_context(|| format!("Could not create {}", path.display()))?;
    write_png(surface, BufWriter::new(file)).with_context(|| format!("Could not write {}", path.display()))
}

/// Writes the game image back out unchanged, creating missing parent directories.
pub fn copy_out(bytes: &[u8], path: &Path) -> Result<()> {
    create_parent(path)?;
    fs::write(path, bytes).with_context(|| format!("Could not write {}", path.display()))
}

/// Writes the contact sheet PNG and the copy of the game image.
///
/// The two outputs do not depend on each other: both are attempted, whatever happens to the other one. Each failure is logged.
///
/// # Errors
/// If at least one of the outputs could not be written.
pub fn write_outputs(
    surface: &impl Surface<DataType = Color>,
    png_path: &Path,
    bytes: &[u8],
    copy_path: &Path,
) -> Result<()> {
    info!("Writing output file: {}", png_path.display());
    let png_result = save_png(surface, png_path);
    info!("Writing copy: {}", copy_path.display());
    let copy_result = copy_out(bytes, copy_path);

    let failures: Vec<_> = [png_result, copy_result]
        .into_iter()
        .filter_map(Result::err)
        .collect();
    for failure in &failures {
        error!("{:#}", failure);
    }
    match failures.len() {
        0 => Ok(()),
        1 => Err(anyhow!("One output could not be written")),
        n => Err(anyhow!("{} outputs could not be written", n)),
    }
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("Could not create directory {}", parent.display())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod test_export {
    use super::{copy_out, save_png, write_outputs, write_png};
    use crate::palette::BBC_MICRO_COLORS;
    use art_extractor_core::color::Color;
    use art_extractor_core::geom::{Point, Size};
    use art_extractor_core::surface::{GenericSurface, Surface};
    use std::fs::File;
    use std::path::Path;

    fn decode(path: &Path) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(File::open(path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("image.png");

        let mut surface = GenericSurface::new(Size::new(3, 2), BBC_MICRO_COLORS[0]);
        surface.set_pixel(Point::new(0, 0), BBC_MICRO_COLORS[1]);
        surface.set_pixel(Point::new(2, 1), BBC_MICRO_COLORS[14]);
        save_png(&surface, &path).unwrap();

        let (info, data) = decode(&path);
        assert_eq!(3, info.width);
        assert_eq!(2, info.height);
        assert_eq!(png::ColorType::Rgb, info.color_type);
        assert_eq!(png::BitDepth::Eight, info.bit_depth);
        #[rustfmt::skip]
        let expected = [
            0xff, 0x00, 0x00,  0x00, 0x00, 0x00,  0x00, 0x00, 0x00,
            0x00, 0x00, 0x00,  0x00, 0x00, 0x00,  0x00, 0x7f, 0x7f,
        ];
        assert_eq!(&expected[..], &data[..]);
    }

    #[test]
    fn test_empty_surface() {
        let surface = GenericSurface::new(Size::new(640, 0), Color::default());
        let mut out = Vec::new();
        assert!(write_png(&surface, &mut out).is_err());
    }

    #[test]
    fn test_copy_out_is_identity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new").join("BRUCE1");
        let bytes: Vec<u8> = (0..=255).cycle().take(9000).collect();

        copy_out(&bytes, &path).unwrap();
        assert_eq!(bytes, std::fs::read(&path).unwrap());

        // Overwriting an existing copy works as well
        copy_out(&bytes[..10], &path).unwrap();
        assert_eq!(&bytes[..10], &std::fs::read(&path).unwrap()[..]);
    }

    #[test]
    fn test_copy_out_into_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("new");
        std::fs::write(&blocker, b"not a directory").unwrap();
        assert!(copy_out(&[1, 2, 3], &blocker.join("BRUCE1")).is_err());
    }

    #[test]
    fn test_outputs_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("new");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let png_path = dir.path().join("image.png");
        let bytes = [1u8, 2, 3];

        // The copy can not be written, the image still is
        let surface = GenericSurface::new(Size::new(2, 2), BBC_MICRO_COLORS[3]);
        let result = write_outputs(&surface, &png_path, &bytes, &blocker.join("BRUCE1"));
        assert!(result.is_err());
        let (info, data) = decode(&png_path);
        assert_eq!(2, info.width);
        assert_eq!(&[0xffu8, 0xff, 0x00][..], &data[0..3]);

        // The image can not be written, the copy still is
        let empty = GenericSurface::new(Size::new(640, 0), Color::default());
        let copy_path = dir.path().join("copy").join("BRUCE1");
        let result = write_outputs(&empty, &dir.path().join("empty.png"), &bytes, &copy_path);
        assert!(result.is_err());
        assert_eq!(&bytes[..], &std::fs::read(&copy_path).unwrap()[..]);

        // Both fine
        let copy_path = dir.path().join("BRUCE1");
        write_outputs(&surface, &dir.path().join("again.png"), &bytes, &copy_path).unwrap();
        assert_eq!(&bytes[..], &std::fs::read(&copy_path).unwrap()[..]);
    }
}
