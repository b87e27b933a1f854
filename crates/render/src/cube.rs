use cubespin_common::Rgb;
use glam::Vec3;

/// One flat-colored quad of the cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub name: &'static str,
    pub color: Rgb,
    /// Corners in emission order.
    pub corners: [Vec3; 4],
}

impl Face {
    /// Split the quad into two triangles: `(v0, v1, v2)` and `(v2, v3, v0)`.
    pub fn triangles(&self) -> [Vec3; 6] {
        let [a, b, c, d] = self.corners;
        [a, b, c, c, d, a]
    }
}

const fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// The 2x2x2 cube centred on the origin.
#[rustfmt::skip]
pub const CUBE_FACES: [Face; 6] = [
    Face {
        name: "top",
        color: Rgb::YELLOW,
        corners: [v( 1.0,  1.0, -1.0), v(-1.0,  1.0, -1.0), v(-1.0,  1.0,  1.0), v( 1.0,  1.0,  1.0)],
    },
    Face {
        name: "bottom",
        color: Rgb::MAGENTA,
        corners: [v( 1.0, -1.0,  1.0), v(-1.0, -1.0,  1.0), v(-1.0, -1.0, -1.0), v( 1.0, -1.0, -1.0)],
    },
    Face {
        name: "front",
        color: Rgb::RED,
        corners: [v( 1.0,  1.0,  1.0), v(-1.0,  1.0,  1.0), v(-1.0, -1.0,  1.0), v( 1.0, -1.0,  1.0)],
    },
    Face {
        name: "back",
        color: Rgb::CYAN,
        corners: [v( 1.0, -1.0, -1.0), v(-1.0, -1.0, -1.0), v(-1.0,  1.0, -1.0), v( 1.0,  1.0, -1.0)],
    },
    Face {
        name: "left",
        color: Rgb::GREEN,
        corners: [v(-1.0,  1.0,  1.0), v(-1.0,  1.0, -1.0), v(-1.0, -1.0, -1.0), v(-1.0, -1.0,  1.0)],
    },
    Face {
        name: "right",
        color: Rgb::BLUE,
        corners: [v( 1.0,  1.0, -1.0), v( 1.0,  1.0,  1.0), v( 1.0, -1.0,  1.0), v( 1.0, -1.0, -1.0)],
    },
];

/// Every face as triangles, paired with its color. 36 entries.
pub fn triangle_list() -> Vec<(Vec3, Rgb)> {
    CUBE_FACES
        .iter()
        .flat_map(|face| face.triangles().into_iter().map(move |p| (p, face.color)))
        .collect()
}
