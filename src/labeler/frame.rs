use image::codecs::gif::GifDecoder;
use image::codecs::png::PngDecoder;
use image::codecs::webp::WebPDecoder;
use image::imageops::FilterType;
use image::{AnimationDecoder, DynamicImage, Frame, ImageResult, RgbImage, RgbaImage};
use log::debug;
use snafu::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::{DecodeSnafu, EmptyAnimationSnafu, Error};

pub const DEFAULT_DISPLAY_SIZE: u32 = 300;

fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

fn open(path: &Path) -> ImageResult<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

fn read_frames(path: &Path) -> ImageResult<Vec<Frame>> {
    match file_extension(path).as_str() {
        "gif" => GifDecoder::new(open(path)?)?.into_frames().collect_frames(),
        "png" => {
            let decoder = PngDecoder::new(open(path)?)?;
            if decoder.is_apng()? {
                decoder.apng()?.into_frames().collect_frames()
            } else {
                still_frame(DynamicImage::from_decoder(decoder)?)
            }
        }
        "webp" => {
            let decoder = WebPDecoder::new(open(path)?)?;
            if decoder.has_animation() {
                decoder.into_frames().collect_frames()
            } else {
                still_frame(DynamicImage::from_decoder(decoder)?)
            }
        }
        _ => still_frame(image::open(path)?),
    }
}

fn still_frame(image: DynamicImage) -> ImageResult<Vec<Frame>> {
    Ok(vec![Frame::new(image.into_rgba8())])
}

/// Decodes every frame of `path` and returns the middle one.
pub fn decode_representative_frame(path: &Path) -> Result<RgbaImage, Error> {
    let frames = read_frames(path).context(DecodeSnafu { path })?;
    let count = frames.len();
    debug!("Decoded {} frames from {:?}, showing #{}", count, path, count / 2);
    let middle = frames.into_iter().nth(count / 2).context(EmptyAnimationSnafu { path })?;
    Ok(middle.into_buffer())
}

/// Drops alpha and stretches `frame` to a `size` by `size` square.
pub fn render_thumbnail(frame: RgbaImage, size: u32) -> RgbImage {
    let rgb = DynamicImage::ImageRgba8(frame).into_rgb8();
    image::imageops::resize(&rgb, size, size, FilterType::CatmullRom)
}
