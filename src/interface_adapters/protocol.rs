// Serialized views of the scene and world for the renderer bundle and logs.

use crate::domain::camera::CameraRig;
use crate::domain::scene::{
    Geometry, Light, LightKind, Material, MaterialId, MaterialKind, MeshSpec, Scene, enemy_parts,
};
use crate::domain::{EnemySnapshot, World, WorldSnapshot};
use serde::Serialize;

/// Full scene description: static environment plus the turret and enemy models.
#[derive(Debug, Clone, Serialize)]
pub struct SceneDto {
    pub camera: CameraDto,
    pub materials: Vec<MaterialDto>,
    pub turret: ModelDto,
    pub enemy_model: Vec<MeshDto>,
    pub ground: MeshDto,
    pub lights: Vec<LightDto>,
}

impl SceneDto {
    pub fn new(scene: &Scene, world: &World) -> Self {
        Self {
            camera: CameraDto::from(&scene.camera),
            materials: MaterialId::ALL.iter().copied().map(MaterialDto::from).collect(),
            turret: ModelDto {
                position: world.turret.position.to_array(),
                parts: world.turret.parts.iter().map(MeshDto::from).collect(),
            },
            enemy_model: enemy_parts()
                .iter()
                .map(MeshDto::from)
                .collect(),
            ground: MeshDto::from(&scene.ground),
            lights: scene.lights.iter().map(LightDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CameraDto {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub initial_pitch: f32,
    pub zoom: bool,
    pub pan: bool,
}

impl From<&CameraRig> for CameraDto {
    fn from(cam: &CameraRig) -> Self {
        Self {
            fov: cam.fov_degrees,
            aspect: cam.aspect,
            near: cam.near,
            far: cam.far,
            position: cam.position.to_array(),
            target: cam.target.to_array(),
            initial_pitch: cam.initial_pitch,
            zoom: cam.zoom_enabled,
            pan: cam.pan_enabled,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MaterialDto {
    pub name: &'static str,
    pub kind: &'static str,
    pub color: String,
    pub metal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflectivity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shininess: Option<f32>,
    pub wireframe: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wireframe_linewidth: Option<f32>,
    pub flat_shading: bool,
}

impl From<MaterialId> for MaterialDto {
    fn from(id: MaterialId) -> Self {
        let Material {
            kind,
            color,
            metal,
            reflectivity,
            shininess,
            wireframe,
            wireframe_linewidth,
            flat_shading,
        } = id.material();

        Self {
            name: id.name(),
            kind: match kind {
                MaterialKind::Phong => "phong",
                MaterialKind::Lambert => "lambert",
                MaterialKind::Basic => "basic",
            },
            color: hex_color(color),
            metal,
            reflectivity,
            shininess,
            wireframe,
            wireframe_linewidth,
            flat_shading,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelDto {
    pub position: [f32; 3],
    pub parts: Vec<MeshDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeshDto {
    pub name: &'static str,
    pub geometry: GeometryDto,
    pub material: &'static str,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl From<&MeshSpec> for MeshDto {
    fn from(mesh: &MeshSpec) -> Self {
        Self {
            name: mesh.name,
            geometry: GeometryDto::from(&mesh.geometry),
            material: mesh.material.name(),
            position: mesh.position.to_array(),
            rotation: mesh.rotation.to_array(),
            scale: mesh.scale.to_array(),
            cast_shadow: mesh.cast_shadow,
            receive_shadow: mesh.receive_shadow,
        }
    }
}

/// Geometry constructor arguments, tagged by geometry type.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryDto {
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
        height_segments: u32,
        open_ended: bool,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
        phi_start: f32,
        phi_length: f32,
        theta_start: f32,
        theta_length: f32,
    },
    Lathe {
        profile: Vec<[f32; 3]>,
        segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

impl From<&Geometry> for GeometryDto {
    fn from(geometry: &Geometry) -> Self {
        match *geometry {
            Geometry::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
                height_segments,
                open_ended,
            } => GeometryDto::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
                height_segments,
                open_ended,
            },
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
                phi_start,
                phi_length,
                theta_start,
                theta_length,
            } => GeometryDto::Sphere {
                radius,
                width_segments,
                height_segments,
                phi_start,
                phi_length,
                theta_start,
                theta_length,
            },
            Geometry::Lathe {
                ref profile,
                segments,
            } => GeometryDto::Lathe {
                profile: profile.iter().map(|p| p.to_array()).collect(),
                segments,
            },
            Geometry::Plane {
                width,
                height,
                width_segments,
                height_segments,
            } => GeometryDto::Plane {
                width,
                height,
                width_segments,
                height_segments,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LightDto {
    pub kind: &'static str,
    pub color: String,
    pub intensity: f32,
    pub position: [f32; 3],
}

impl From<&Light> for LightDto {
    fn from(light: &Light) -> Self {
        Self {
            kind: match light.kind {
                LightKind::Spot => "spot",
                LightKind::Point => "point",
            },
            color: hex_color(light.color),
            intensity: light.intensity,
            position: light.position.to_array(),
        }
    }
}

/// Per-frame world state.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSnapshotDto {
    pub tick: u64,
    pub turret: TurretStateDto,
    pub enemies: Vec<EnemyStateDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TurretStateDto {
    pub position: [f32; 3],
    pub life: u32,
}

impl From<WorldSnapshot> for WorldSnapshotDto {
    fn from(snapshot: WorldSnapshot) -> Self {
        Self {
            tick: snapshot.tick,
            turret: TurretStateDto {
                position: snapshot.turret_position.to_array(),
                life: snapshot.turret_life,
            },
            enemies: snapshot.enemies.iter().map(EnemyStateDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyStateDto {
    pub id: u64,
    pub position: [f32; 3],
    pub rotation_y: f32,
    pub life: u32,
}

impl From<&EnemySnapshot> for EnemyStateDto {
    fn from(enemy: &EnemySnapshot) -> Self {
        Self {
            id: enemy.id,
            position: enemy.position.to_array(),
            rotation_y: enemy.facing,
            life: enemy.life,
        }
    }
}

fn hex_color(color: u32) -> String {
    format!("#{color:06x}")
}
