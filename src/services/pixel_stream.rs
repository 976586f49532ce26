use chroma_core::Color;
use std::io::{BufReader, ErrorKind, Read};

use crate::error::AppError;

/// Iterator over raw interleaved 8-bit pixels.
///
/// Stands in for an image decoder: the input is a headerless RGB (or RGBA)
/// byte stream, e.g. the output of `convert image.png rgb:-`. Alpha bytes
/// are skipped.
pub struct PixelStream<R> {
    reader: BufReader<R>,
    channels: usize,
    done: bool,
}

impl<R: Read> PixelStream<R> {
    pub fn new(reader: R, channels: usize) -> Result<Self, AppError> {
        if !(3..=4).contains(&channels) {
            return Err(AppError::UnsupportedChannels(channels));
        }
        Ok(Self {
            reader: BufReader::new(reader),
            channels,
            done: false,
        })
    }

    /// Fill `buf` as far as the reader allows; returns bytes read.
    fn read_pixel(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for PixelStream<R> {
    type Item = Result<Color, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = [0u8; 4];
        let channels = self.channels;
        let result = match self.read_pixel(&mut buf[..channels]) {
            Ok(0) => None,
            Ok(n) if n == channels => return Some(Ok(Color::from_u8(buf[0], buf[1], buf[2]))),
            Ok(n) => Some(Err(AppError::PartialPixel {
                trailing: n,
                channels,
            })),
            Err(e) => Some(Err(AppError::Io(e))),
        };
        self.done = true;
        result
    }
}
