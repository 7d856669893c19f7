use image::imageops::FilterType;
use ndarray::Array3;

/// Input resolution expected by the serving model.
pub const INPUT_SIZE: u32 = 224;

/// A decoded image normalized for the serving model: H x W x 3,
/// channel values scaled to [0, 1]. The leading batch dimension is
/// added when the request payload is built.
pub struct ImageTensor(Array3<f32>);

impl ImageTensor {
    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }

    pub fn values(&self) -> impl Iterator<Item = &f32> {
        self.0.iter()
    }

    /// Nested-array form for the serving protocol's `instances` field.
    pub fn to_instance(&self) -> Vec<Vec<Vec<f32>>> {
        let size = INPUT_SIZE as usize;
        let mut rows = Vec::with_capacity(size);
        for y in 0..size {
            let mut row = Vec::with_capacity(size);
            for x in 0..size {
                row.push(vec![self.0[[y, x, 0]], self.0[[y, x, 1]], self.0[[y, x, 2]]]);
            }
            rows.push(row);
        }
        rows
    }
}

/// Decodes raw image bytes, resizes to the fixed model resolution and
/// scales pixel values to [0, 1]. Any decode failure propagates to the
/// caller; there is no retry.
pub fn preprocess(image_bytes: &[u8]) -> Result<ImageTensor, image::ImageError> {
    let img = image::load_from_memory(image_bytes)?;
    let resized = img.resize_exact(INPUT_SIZE, INPUT_SIZE, FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let size = INPUT_SIZE as usize;
    let mut tensor = Array3::<f32>::zeros((size, size, 3));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..3 {
            tensor[[y as usize, x as usize, c]] = pixel[c] as f32 / 255.0;
        }
    }

    Ok(ImageTensor(tensor))
}
