//! Shared color constants for the UI.

use egui::Color32;
use roster_business::TagColor;

/// Forest green color for success notifications.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for errors and destructive actions.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Light red fill behind the error banner.
pub const COLOR_ERROR_BG: Color32 = Color32::from_rgb(255, 241, 240);

/// Subtle gray for table borders.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Light gray header background.
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Fill, border and text colors for a status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPalette {
    pub fill: Color32,
    pub stroke: Color32,
    pub text: Color32,
}

impl TagPalette {
    const fn new(fill: [u8; 3], stroke: [u8; 3], text: [u8; 3]) -> Self {
        Self {
            fill: Color32::from_rgb(fill[0], fill[1], fill[2]),
            stroke: Color32::from_rgb(stroke[0], stroke[1], stroke[2]),
            text: Color32::from_rgb(text[0], text[1], text[2]),
        }
    }
}

pub fn tag_palette(color: TagColor) -> TagPalette {
    match color {
        TagColor::Green => TagPalette::new([246, 255, 237], [183, 235, 143], [56, 158, 13]),
        TagColor::Red => TagPalette::new([255, 241, 240], [255, 163, 158], [207, 19, 34]),
        TagColor::Orange => TagPalette::new([255, 247, 230], [255, 213, 145], [212, 107, 8]),
        TagColor::Blue => TagPalette::new([230, 244, 255], [145, 202, 255], [9, 88, 217]),
        TagColor::Cyan => TagPalette::new([230, 255, 251], [135, 232, 222], [8, 151, 156]),
        TagColor::Purple => TagPalette::new([249, 240, 255], [211, 173, 247], [83, 29, 171]),
        TagColor::Gray => TagPalette::new([245, 245, 245], [217, 217, 217], [89, 89, 89]),
        TagColor::Default => TagPalette::new([250, 250, 250], [217, 217, 217], [38, 38, 38]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_and_gray_are_distinct() {
        assert_ne!(tag_palette(TagColor::Default), tag_palette(TagColor::Gray));
    }

    #[test]
    fn green_text_is_green() {
        let palette = tag_palette(TagColor::Green);
        assert!(palette.text.g() > palette.text.r());
    }
}
