//! Texture-atlas UV remapping.
//!
//! The atlas itself - the pixel data and its GPU upload - belongs to the
//! render collaborator. What the mesher needs from it is pure arithmetic:
//! a table of named sheet regions and the remap of a unit-quad texture
//! coordinate into one of them. That table lives here.

use std::collections::HashMap;

use cgmath::Vector2;
use log::error;

/// A named rectangular region of the texture sheet, in texels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextureUv {
    /// Left edge of the region.
    pub x: i32,
    /// Top edge of the region (sheet y grows downward).
    pub y: i32,
    /// Region width.
    pub width: i32,
    /// Region height.
    pub height: i32,
}

impl TextureUv {
    /// Creates a region from its top-left corner and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        TextureUv {
            x,
            y,
            width,
            height,
        }
    }
}

/// Sheet regions of the block textures the client registers at startup,
/// as (x, y, width, height) texel rectangles.
static DEFAULT_LAYOUT: phf::Map<&'static str, [i32; 4]> = phf::phf_map! {
    "test" => [0, 0, 16, 16],
    "stone" => [0, 16, 16, 16],
    "grass_top" => [16, 16, 16, 16],
    "grass_sides" => [16, 0, 16, 16],
};

/// The UV table of a texture sheet.
///
/// Maps texture names to sheet regions and rewrites unit-quad texture
/// coordinates into them. The mesher calls [`Atlas::apply_texture_uv`] once
/// per emitted vertex.
pub struct Atlas {
    sheet_width: i32,
    sheet_height: i32,
    uvs: HashMap<String, TextureUv>,
}

impl Atlas {
    /// Creates an empty UV table for a sheet of the given texel dimensions.
    pub fn new(sheet_width: i32, sheet_height: i32) -> Self {
        Atlas {
            sheet_width,
            sheet_height,
            uvs: HashMap::new(),
        }
    }

    /// Creates a UV table pre-populated with the built-in block texture
    /// layout.
    pub fn with_default_layout(sheet_width: i32, sheet_height: i32) -> Self {
        let mut atlas = Atlas::new(sheet_width, sheet_height);
        for (name, &[x, y, width, height]) in DEFAULT_LAYOUT.entries() {
            atlas.register_texture_uv(name, TextureUv::new(x, y, width, height));
        }
        atlas
    }

    /// Associates `name` with a region of the sheet. A repeated name
    /// replaces the earlier region.
    pub fn register_texture_uv(&mut self, name: &str, texture_uv: TextureUv) {
        self.uvs.insert(name.to_owned(), texture_uv);
    }

    /// Rewrites a unit-quad texture coordinate into the named region's
    /// sub-rectangle of the sheet.
    ///
    /// The v axis is flipped around the sheet so that v = 1 on the unit
    /// quad lands on the top row of the region, matching image coordinates
    /// that grow downward.
    ///
    /// # Panics
    /// Panics when `texture_name` was never registered - mesh generation
    /// only looks up names out of the block catalog, so a miss means the
    /// catalog and the atlas layout disagree.
    pub fn apply_texture_uv(&self, coordinate: Vector2<f32>, texture_name: &str) -> Vector2<f32> {
        let Some(texture_uv) = self.uvs.get(texture_name) else {
            error!("No such texture in atlas: {texture_name}");
            panic!("no such texture in atlas: {texture_name}");
        };

        let u = (coordinate.x * texture_uv.width as f32 + texture_uv.x as f32)
            / self.sheet_width as f32;

        let v_from_top = 1.0 - coordinate.y;
        let v = (v_from_top * texture_uv.height as f32 + texture_uv.y as f32)
            / self.sheet_height as f32;

        Vector2::new(u, 1.0 - v)
    }
}
