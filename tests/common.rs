#![allow(dead_code)]

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use tempfile::TempDir;

#[macro_export]
macro_rules! assert_delta {
    ($x:expr, $y:expr, $d:expr) => {{
        let (x, y, d) = ($x, $y, $d);
        if !((x - y).abs() < d) {
            panic!("{} is not within {} of {}", x, d, y);
        }
    }};
}

pub const DEFAULT_DELTA: f64 = 0.000001;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const CYAN: Rgb<u8> = Rgb([0, 255, 255]);
pub const MAGENTA: Rgb<u8> = Rgb([255, 0, 255]);
pub const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);

const SIZE: u32 = 10;

fn filled(width: u32, height: u32, colour: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, colour)
}

// Horizontal bands, each `rows` tall, from the top of a 10x10 image.
fn bands(colours: &[(Rgb<u8>, u32)]) -> RgbImage {
    let mut image = filled(SIZE, SIZE, WHITE);
    let mut top = 0;
    for (colour, rows) in colours {
        draw_filled_rect_mut(&mut image, Rect::at(0, top).of_size(SIZE, *rows), *colour);
        top += *rows as i32;
    }
    image
}

/// Test images written to a temporary directory that lives as long as the
/// value does.
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Fixtures {
        Fixtures {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn save(&self, name: &str, image: &RgbImage) -> PathBuf {
        let file_path = self.path(name);
        image.save(&file_path).unwrap();
        file_path
    }

    pub fn save_rgba(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let file_path = self.path(name);
        image.save(&file_path).unwrap();
        file_path
    }

    pub fn save_jpeg(&self, name: &str, image: &RgbImage, quality: u8) -> PathBuf {
        let file_path = self.path(name);
        let mut writer = BufWriter::new(File::create(&file_path).unwrap());
        JpegEncoder::new_with_quality(&mut writer, quality)
            .encode(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
            .unwrap();
        file_path
    }

    pub fn write_bytes(&self, name: &str, contents: &[u8]) -> PathBuf {
        let file_path = self.path(name);
        fs::write(&file_path, contents).unwrap();
        file_path
    }

    pub fn white(&self) -> PathBuf {
        self.save("white.png", &filled(SIZE, SIZE, WHITE))
    }

    pub fn black(&self) -> PathBuf {
        self.save("black.png", &filled(SIZE, SIZE, BLACK))
    }

    pub fn white_20x5(&self) -> PathBuf {
        self.save("white_20x5.png", &filled(20, 5, WHITE))
    }

    /// White image carrying textual metadata chunks.
    pub fn white_with_metadata(&self) -> PathBuf {
        let file_path = self.path("white_with-metadata.png");
        let image = filled(SIZE, SIZE, WHITE);

        let writer = BufWriter::new(File::create(&file_path).unwrap());
        let mut encoder = png::Encoder::new(writer, SIZE, SIZE);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder
            .add_text_chunk("Title".to_string(), "White square".to_string())
            .unwrap();
        encoder
            .add_text_chunk("Comment".to_string(), "Same pixels, more bytes".to_string())
            .unwrap();

        let mut png_writer = encoder.write_header().unwrap();
        png_writer.write_image_data(image.as_raw()).unwrap();
        png_writer.finish().unwrap();
        file_path
    }

    pub fn black_10_white_90_horz(&self) -> PathBuf {
        let mut image = filled(SIZE, SIZE, WHITE);
        draw_filled_rect_mut(&mut image, Rect::at(0, 0).of_size(SIZE, 1), BLACK);
        self.save("black-10_white-90_horz.png", &image)
    }

    pub fn black_10_white_90_vert(&self) -> PathBuf {
        let mut image = filled(SIZE, SIZE, WHITE);
        draw_filled_rect_mut(&mut image, Rect::at(0, 0).of_size(1, SIZE), BLACK);
        self.save("black-10_white-90_vert.png", &image)
    }

    pub fn black_90_white_10_horz(&self) -> PathBuf {
        let mut image = filled(SIZE, SIZE, BLACK);
        draw_filled_rect_mut(&mut image, Rect::at(0, 0).of_size(SIZE, 1), WHITE);
        self.save("black-90_white-10_horz.png", &image)
    }

    pub fn black_90_white_10_vert(&self) -> PathBuf {
        let mut image = filled(SIZE, SIZE, BLACK);
        draw_filled_rect_mut(&mut image, Rect::at(0, 0).of_size(1, SIZE), WHITE);
        self.save("black-90_white-10_vert.png", &image)
    }

    pub fn chessboard(&self) -> PathBuf {
        let image = RgbImage::from_fn(SIZE, SIZE, |x, y| {
            if (x + y) % 2 == 0 {
                BLACK
            } else {
                WHITE
            }
        });
        self.save("black-50_white-50_chessboard.png", &image)
    }

    pub fn chessboard_inv(&self) -> PathBuf {
        let image = RgbImage::from_fn(SIZE, SIZE, |x, y| {
            if (x + y) % 2 == 0 {
                WHITE
            } else {
                BLACK
            }
        });
        self.save("black-50_white-50_chessboard-inv.png", &image)
    }

    /// 30% red, 30% green, 30% blue, 10% white.
    pub fn rgb_horz(&self) -> PathBuf {
        let image = bands(&[(RED, 3), (GREEN, 3), (BLUE, 3), (WHITE, 1)]);
        self.save("rgb_horz.png", &image)
    }

    /// 30% cyan, 30% magenta, 30% yellow, 10% black.
    pub fn cmyk_horz(&self) -> PathBuf {
        let image = bands(&[(CYAN, 3), (MAGENTA, 3), (YELLOW, 3), (BLACK, 1)]);
        self.save("cmyk_horz.png", &image)
    }

    /// White image with a transparency gradient.
    pub fn white_translucent(&self) -> PathBuf {
        let image = RgbaImage::from_fn(SIZE, SIZE, |x, y| Rgba([255, 255, 255, (x * y) as u8]));
        self.save_rgba("white_translucent.png", &image)
    }

    pub fn rgb_circles(&self) -> PathBuf {
        self.save("rgb-circles.png", &rgb_circles())
    }

    pub fn rgb_circles_jpeg(&self, quality: u8) -> PathBuf {
        self.save_jpeg(
            &format!("rgb-circles_{}.jpg", quality),
            &rgb_circles(),
            quality,
        )
    }
}

// Colour gradient with three solid circles, enough sharp edges for JPEG
// artifacts to show up.
pub fn rgb_circles() -> RgbImage {
    let mut image = RgbImage::from_fn(64, 64, |x, y| {
        Rgb([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8])
    });
    draw_filled_circle_mut(&mut image, (22, 24), 14, RED);
    draw_filled_circle_mut(&mut image, (42, 24), 14, GREEN);
    draw_filled_circle_mut(&mut image, (32, 42), 14, BLUE);
    image
}
