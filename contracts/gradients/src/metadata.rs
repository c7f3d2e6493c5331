//! On-chain metadata rendering: a fixed-template SVG wrapped into a JSON
//! document, both delivered as self-contained data URIs. Everything is
//! assembled in fixed stack buffers; the only host allocation is the final
//! `Bytes`.

use soroban_sdk::{Bytes, Env};

use crate::color::{self, Color, HEX_LEN};

const SVG_HEAD: &[u8] = b"<svg width='1024' height='1024' viewBox='0 0 1024 1024' fill='none' xmlns='http://www.w3.org/2000/svg'><rect width='1024' height='1024' fill='white'/><rect width='1024' height='1024' fill='url(#paint0_linear)'/><defs><linearGradient id='paint0_linear' x1='0' y1='0' x2='1017.54' y2='1017.57' gradientUnits='userSpaceOnUse'><stop stop-color='#";
const SVG_MID: &[u8] = b"'/><stop offset='1' stop-color='#";
const SVG_TAIL: &[u8] = b"'/></linearGradient></defs></svg>\n";

const IMAGE_PREFIX: &[u8] = b"data:image/svg+xml,";
const URI_PREFIX: &[u8] = b"data:text/plain;charset=utf-8,";

const JSON_HEAD: &[u8] = b"{\"name\": \"CryptoGradient #";
const JSON_MID: &[u8] =
    b"\", \"description\": \"10k unique on-chain gradients\", \"image\": \"";
const JSON_TAIL: &[u8] = b"\"}";

// Buffer capacities, sized from the fixed templates: the raw SVG is 421
// bytes, the escaped image URI 488, the JSON document 578 plus the token
// ordinal, and the fully percent-encoded outer URI 916 plus 3 bytes per
// ordinal digit.
const SVG_CAP: usize = 512;
const IMAGE_CAP: usize = 640;
const JSON_CAP: usize = 768;
const URI_CAP: usize = 1280;

/// Renders the 1024x1024 two-stop linear-gradient SVG for a color pair.
pub fn render_svg(env: &Env, color_a: Color, color_b: Color) -> Bytes {
    let svg: Buf<SVG_CAP> = svg_document(color_a, color_b);

    Bytes::from_slice(env, svg.as_slice())
}

/// Renders the metadata document for a token as a `data:text/plain` URI
/// wrapping percent-encoded JSON, whose `image` field is a
/// `data:image/svg+xml` URI wrapping the percent-encoded SVG.
pub fn render_metadata(env: &Env, token_id: u64, color_a: Color, color_b: Color) -> Bytes {
    let svg: Buf<SVG_CAP> = svg_document(color_a, color_b);

    // Inside the image URI only the markup characters need escaping.
    let mut image: Buf<IMAGE_CAP> = Buf::new();
    image.extend(IMAGE_PREFIX);
    for &byte in svg.as_slice() {
        match byte {
            b'<' => image.extend(b"%3C"),
            b'>' => image.extend(b"%3E"),
            b'#' => image.extend(b"%23"),
            b'\n' => image.extend(b"%0A"),
            _ => image.push(byte),
        }
    }

    let mut json: Buf<JSON_CAP> = Buf::new();
    json.extend(JSON_HEAD);
    json.extend_decimal(token_id);
    json.extend(JSON_MID);
    json.extend(image.as_slice());
    json.extend(JSON_TAIL);

    // The outer document percent-encodes everything outside the RFC 3986
    // unreserved set, which leaves the already-escaped image intact.
    let mut uri: Buf<URI_CAP> = Buf::new();
    uri.extend(URI_PREFIX);
    for &byte in json.as_slice() {
        if is_unreserved(byte) {
            uri.push(byte);
        } else {
            uri.extend_percent_encoded(byte);
        }
    }

    Bytes::from_slice(env, uri.as_slice())
}

fn svg_document(color_a: Color, color_b: Color) -> Buf<SVG_CAP> {
    let mut hex = [0u8; HEX_LEN];
    let mut svg = Buf::new();

    svg.extend(SVG_HEAD);
    color::encode_into(color_a, &mut hex);
    svg.extend(&hex);
    svg.extend(SVG_MID);
    color::encode_into(color_b, &mut hex);
    svg.extend(&hex);
    svg.extend(SVG_TAIL);

    svg
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// Fixed-capacity byte writer. Capacities above cover the worst case for
/// every template, so the writes cannot run past the end.
struct Buf<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> Buf<N> {
    fn new() -> Self {
        Self {
            bytes: [0u8; N],
            len: 0,
        }
    }

    fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    fn push(&mut self, byte: u8) {
        self.bytes[self.len] = byte;
        self.len += 1;
    }

    fn extend(&mut self, chunk: &[u8]) {
        self.bytes[self.len..self.len + chunk.len()].copy_from_slice(chunk);
        self.len += chunk.len();
    }

    fn extend_percent_encoded(&mut self, byte: u8) {
        const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        self.push(b'%');
        self.push(DIGITS[(byte >> 4) as usize]);
        self.push(DIGITS[(byte & 0xF) as usize]);
    }

    fn extend_decimal(&mut self, mut value: u64) {
        let mut digits = [0u8; 20];
        let mut idx = digits.len();

        loop {
            idx -= 1;
            digits[idx] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }

        self.extend(&digits[idx..]);
    }
}
