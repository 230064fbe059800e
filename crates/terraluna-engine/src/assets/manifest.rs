use serde::{Deserialize, Serialize};

/// Where the stock textures live.
pub const DEFAULT_TEXTURE_BASE: &str = "https://threejs.org/examples/textures/";

/// Declarative description of the scene the host builds its scene graph from.
/// Serialized to JSON and handed to the JS side once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// CSS selector of the canvas to bind.
    pub canvas_selector: String,
    pub earth: SphereDescriptor,
    pub moon: SphereDescriptor,
    pub sun: SphereDescriptor,
    pub stars: StarsDescriptor,
    /// Flare sprites attached to the sun.
    pub lens_flare: Vec<FlareElement>,
    pub lights: Vec<LightDescriptor>,
    /// Resting camera distance along +Z.
    pub camera_distance: f32,
}

/// A textured or flat-colored sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDescriptor {
    pub radius: f32,
    /// Width and height segment count.
    pub segments: u32,
    pub position: [f32; 3],
    pub material: MaterialDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaterialDescriptor {
    /// Unlit solid color.
    Basic { color: u32 },
    /// Lit, textured surface.
    Phong {
        texture: TextureRef,
        #[serde(default = "default_shininess")]
        shininess: f32,
        #[serde(default)]
        reflectivity: f32,
        #[serde(default)]
        specular: u32,
    },
}

/// A texture URL plus the color to use if it fails to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureRef {
    pub url: String,
    #[serde(default = "default_fallback_color")]
    pub fallback_color: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarsDescriptor {
    pub color: u32,
    /// Point sprite size in world units.
    pub size: f32,
}

/// One sprite in the lens flare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlareElement {
    pub texture: TextureRef,
    /// Sprite size in pixels.
    pub size: f32,
    /// 0 at the light source, 1 at the screen center mirror point.
    pub distance: f32,
    /// Optional tint; `None` leaves the sprite white.
    #[serde(default)]
    pub color: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LightDescriptor {
    Ambient { color: u32, intensity: f32 },
    /// `range` of 0 means no falloff limit.
    Point { color: u32, intensity: f32, range: f32, position: [f32; 3] },
    Directional { color: u32, intensity: f32, position: [f32; 3] },
}

fn default_shininess() -> f32 {
    30.0
}

fn default_fallback_color() -> u32 {
    0x808080
}

const SUN_COLOR: u32 = 0xffff00;
const SUN_POSITION: [f32; 3] = [50.0, 20.0, 50.0];
const KEY_LIGHT_POSITION: [f32; 3] = [5.0, 3.0, 5.0];

impl TextureRef {
    pub fn new(url: impl Into<String>, fallback_color: u32) -> Self {
        Self {
            url: url.into(),
            fallback_color,
        }
    }
}

impl SceneDescription {
    /// The Earth/Moon scene with textures under `texture_base`.
    pub fn earth_and_moon(texture_base: &str, camera_distance: f32) -> Self {
        let texture = |path: &str, fallback: u32| TextureRef::new(format!("{texture_base}{path}"), fallback);
        let flare0 = texture("lensflare/lensflare0.png", 0xffffff);
        let flare3 = texture("lensflare/lensflare3.png", 0xffffff);

        let mut lens_flare = vec![FlareElement {
            texture: flare0,
            size: 700.0,
            distance: 0.0,
            color: Some(SUN_COLOR),
        }];
        for (size, distance) in [(60.0, 0.6), (70.0, 0.7), (120.0, 0.9), (70.0, 1.0)] {
            lens_flare.push(FlareElement {
                texture: flare3.clone(),
                size,
                distance,
                color: None,
            });
        }

        Self {
            canvas_selector: "#firstCanvas".to_string(),
            earth: SphereDescriptor {
                radius: 1.0,
                segments: 32,
                position: [0.0; 3],
                material: MaterialDescriptor::Phong {
                    texture: texture("planets/earth_atmos_2048.jpg", 0x2a4d8f),
                    shininess: 1.0,
                    reflectivity: 0.5,
                    specular: 0x333333,
                },
            },
            moon: SphereDescriptor {
                radius: 0.27,
                segments: 32,
                position: [1.5, 0.0, 0.0],
                material: MaterialDescriptor::Phong {
                    texture: texture("planets/moon_1024.jpg", 0x9a9a9a),
                    shininess: default_shininess(),
                    reflectivity: 0.0,
                    specular: 0x111111,
                },
            },
            sun: SphereDescriptor {
                radius: 0.5,
                segments: 32,
                position: SUN_POSITION,
                material: MaterialDescriptor::Basic { color: SUN_COLOR },
            },
            stars: StarsDescriptor {
                color: 0xffffff,
                size: 0.1,
            },
            lens_flare,
            lights: vec![
                LightDescriptor::Ambient { color: 0x333333, intensity: 1.0 },
                LightDescriptor::Point {
                    color: 0xffffff,
                    intensity: 2.0,
                    range: 300.0,
                    position: KEY_LIGHT_POSITION,
                },
                LightDescriptor::Point {
                    color: 0xffffff,
                    intensity: 2.0,
                    range: 0.0,
                    position: SUN_POSITION,
                },
                LightDescriptor::Directional {
                    color: 0xffffff,
                    intensity: 1.0,
                    position: KEY_LIGHT_POSITION,
                },
            ],
            camera_distance,
        }
    }

    /// Every texture the host needs to fetch, deduplicated, in first-use order.
    pub fn texture_urls(&self) -> Vec<&str> {
        let mut urls: Vec<&str> = Vec::new();
        let materials = [&self.earth.material, &self.moon.material, &self.sun.material];
        let sphere_textures = materials.into_iter().filter_map(|m| match m {
            MaterialDescriptor::Phong { texture, .. } => Some(texture.url.as_str()),
            MaterialDescriptor::Basic { .. } => None,
        });
        let flare_textures = self.lens_flare.iter().map(|f| f.texture.url.as_str());
        for url in sphere_textures.chain(flare_textures) {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
        urls
    }

    /// Parse a description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self::earth_and_moon(DEFAULT_TEXTURE_BASE, 5.0)
    }
}
