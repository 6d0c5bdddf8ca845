//! Scene descriptions loaded from TOML or JSON.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use lumen_math::{Color, Matrix};
use lumen_raytrace::{ObjectId, Scene, Sphere};
use serde::{Deserialize, Serialize};
use slotmap::SecondaryMap;

use crate::camera::Camera;

/// One step of an object transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformOp {
    Translate { x: f64, y: f64, z: f64 },
    Scale { x: f64, y: f64, z: f64 },
    RotateX { radians: f64 },
    RotateY { radians: f64 },
    RotateZ { radians: f64 },
    Shear { xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64 },
    Matrix { rows: [[f64; 4]; 4] },
}

impl TransformOp {
    pub fn to_matrix(&self) -> Result<Matrix> {
        Ok(match *self {
            TransformOp::Translate { x, y, z } => Matrix::translation(x, y, z),
            TransformOp::Scale { x, y, z } => Matrix::scaling(x, y, z),
            TransformOp::RotateX { radians } => Matrix::rotation_x(radians),
            TransformOp::RotateY { radians } => Matrix::rotation_y(radians),
            TransformOp::RotateZ { radians } => Matrix::rotation_z(radians),
            TransformOp::Shear { xy, xz, yx, yz, zx, zy } => {
                Matrix::shearing(xy, xz, yx, yz, zx, zy)
            }
            TransformOp::Matrix { rows } => Matrix::from_rows(rows)?,
        })
    }
}

/// Compose steps so that the first listed is applied to the object first.
pub fn compose(ops: &[TransformOp]) -> Result<Matrix> {
    ops.iter().try_fold(Matrix::identity(4), |acc, op| -> Result<Matrix> {
        Ok(op.to_matrix()?.multiply(&acc)?)
    })
}

fn default_color() -> Color {
    Color::RED
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereSpec {
    #[serde(default = "default_color")]
    pub color: Color,
    #[serde(default)]
    pub transform: Vec<TransformOp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    #[serde(default)]
    pub camera: Camera,
    #[serde(default)]
    pub spheres: Vec<SphereSpec>,
}

impl SceneFile {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a scene file, picking the parser from the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let parsed = match ext.as_str() {
            "toml" => Self::from_toml_str(&text),
            "json" => Self::from_json_str(&text),
            _ => bail!("unknown scene format: {:?} (expected .toml or .json)", ext),
        };
        parsed.with_context(|| format!("parsing {}", path.display()))
    }

    /// Build the scene and remember each sphere's color.
    pub fn build(&self) -> Result<(Scene, SecondaryMap<ObjectId, Color>)> {
        let mut scene = Scene::new();
        let mut colors = SecondaryMap::new();
        for (i, spec) in self.spheres.iter().enumerate() {
            let transform = compose(&spec.transform).with_context(|| format!("sphere {i}"))?;
            let id = scene.add(Sphere::new().with_transform(transform));
            colors.insert(id, spec.color);
        }
        log::debug!("built scene with {} spheres", scene.len());
        Ok((scene, colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::point;
    use std::f64::consts::FRAC_PI_2;

    const SCENE_TOML: &str = r#"
        [camera]
        pixels = 20

        [[spheres]]
        color = [0.0, 1.0, 0.0]
        transform = [
            { op = "scale", x = 0.5, y = 0.5, z = 0.5 },
            { op = "translate", x = 0.0, y = 0.0, z = -2.5 },
        ]

        [[spheres]]
    "#;

    #[test]
    fn test_parse_toml() {
        let file = SceneFile::from_toml_str(SCENE_TOML).unwrap();
        assert_eq!(file.camera.pixels, 20);
        assert_eq!(file.camera.wall_z, 10.0);
        assert_eq!(file.spheres.len(), 2);
        assert_eq!(file.spheres[0].color, Color::new(0.0, 1.0, 0.0));
        assert_eq!(file.spheres[1].color, Color::RED);
        assert!(file.spheres[1].transform.is_empty());
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "spheres": [
                {"color": [1, 1, 1], "transform": [{"op": "rotate_y", "radians": 1.0}]}
            ]
        }"#;
        let file = SceneFile::from_json_str(json).unwrap();
        assert_eq!(file.camera, Camera::default());
        assert_eq!(file.spheres[0].transform, vec![TransformOp::RotateY { radians: 1.0 }]);
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let err = SceneFile::from_toml_str(
            r#"
            [[spheres]]
            transform = [{ op = "twist", angle = 1.0 }]
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(SceneFile::from_toml_str("[camera]\nzoom = 2.0\n").is_err());
    }

    #[test]
    fn test_compose_applies_in_listed_order() {
        let ops = [
            TransformOp::RotateX { radians: FRAC_PI_2 },
            TransformOp::Scale { x: 5.0, y: 5.0, z: 5.0 },
            TransformOp::Translate { x: 10.0, y: 5.0, z: 7.0 },
        ];
        let m = compose(&ops).unwrap();
        assert_eq!(m.multiply_tuple(&point(1.0, 0.0, 1.0)).unwrap(), point(15.0, 0.0, 7.0));
        assert_eq!(compose(&[]).unwrap(), Matrix::identity(4));
    }

    #[test]
    fn test_explicit_matrix_op() {
        let op = TransformOp::Matrix {
            rows: [
                [1.0, 0.0, 0.0, 2.0],
                [0.0, 1.0, 0.0, 3.0],
                [0.0, 0.0, 1.0, 4.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        };
        assert_eq!(op.to_matrix().unwrap(), Matrix::translation(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_build_assigns_colors() {
        let file = SceneFile::from_toml_str(SCENE_TOML).unwrap();
        let (scene, colors) = file.build().unwrap();
        assert_eq!(scene.len(), 2);
        let mut seen: Vec<Color> = scene.iter().map(|(id, _)| colors[id]).collect();
        seen.sort_by(|a, b| a.green.total_cmp(&b.green));
        assert_eq!(seen, vec![Color::RED, Color::new(0.0, 1.0, 0.0)]);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let path = std::env::temp_dir().join(format!("lumen-scene-{}.yaml", std::process::id()));
        fs::write(&path, "spheres = []").unwrap();
        let result = SceneFile::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_toml_file() {
        let path = std::env::temp_dir().join(format!("lumen-scene-{}.toml", std::process::id()));
        fs::write(&path, SCENE_TOML).unwrap();
        let result = SceneFile::load(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(result.unwrap().spheres.len(), 2);
    }
}
