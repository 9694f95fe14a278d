// Declarative scene description handed to the external renderer.
//
// Nothing here draws; it only records geometry parameters, materials and
// placement for the turret, enemies, ground and lights.

use crate::domain::camera::CameraRig;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_8, PI, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Phong,
    Lambert,
    Basic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: u32,
    pub metal: bool,
    pub reflectivity: Option<f32>,
    pub shininess: Option<f32>,
    pub wireframe: bool,
    pub wireframe_linewidth: Option<f32>,
    pub flat_shading: bool,
}

impl Material {
    const fn new(kind: MaterialKind, color: u32) -> Self {
        Self {
            kind,
            color,
            metal: false,
            reflectivity: None,
            shininess: None,
            wireframe: false,
            wireframe_linewidth: None,
            flat_shading: false,
        }
    }
}

/// Named materials shared by every mesh in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialId {
    Metal,
    MetalWire,
    MetalFlat,
    Ground,
    Badguy,
    BadguyHurt,
    Spot,
}

impl MaterialId {
    pub const ALL: [MaterialId; 7] = [
        MaterialId::Metal,
        MaterialId::MetalWire,
        MaterialId::MetalFlat,
        MaterialId::Ground,
        MaterialId::Badguy,
        MaterialId::BadguyHurt,
        MaterialId::Spot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MaterialId::Metal => "metal",
            MaterialId::MetalWire => "metal_wire",
            MaterialId::MetalFlat => "metal_flat",
            MaterialId::Ground => "ground",
            MaterialId::Badguy => "badguy",
            MaterialId::BadguyHurt => "badguy_hurt",
            MaterialId::Spot => "spot",
        }
    }

    pub fn material(self) -> Material {
        use MaterialKind::*;
        match self {
            MaterialId::Metal => Material {
                metal: true,
                reflectivity: Some(0.25),
                ..Material::new(Phong, 0xDDDDDD)
            },
            MaterialId::MetalWire => Material {
                wireframe: true,
                wireframe_linewidth: Some(4.0),
                ..Material::new(Phong, 0x666666)
            },
            MaterialId::MetalFlat => Material {
                flat_shading: true,
                ..Material::new(Lambert, 0xDDDDDD)
            },
            MaterialId::Ground => Material::new(Lambert, 0xFFFFFF),
            MaterialId::Badguy => Material {
                metal: true,
                shininess: Some(90.0),
                ..Material::new(Phong, 0x555555)
            },
            MaterialId::BadguyHurt => Material {
                metal: true,
                ..Material::new(Phong, 0x994444)
            },
            MaterialId::Spot => Material::new(Basic, 0xFFFFFF),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
        height_segments: u32,
        open_ended: bool,
    },
    /// Partial spheres use the phi (around Y) and theta (from the pole) sweeps.
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
        phi_start: f32,
        phi_length: f32,
        theta_start: f32,
        theta_length: f32,
    },
    /// Profile points are revolved around the axis `segments` times.
    Lathe { profile: Vec<Vec3>, segments: u32 },
    Plane {
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

impl Geometry {
    fn hemisphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Geometry::Sphere {
            radius,
            width_segments,
            height_segments,
            phi_start: 0.0,
            phi_length: TAU,
            theta_start: 0.0,
            theta_length: FRAC_PI_2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeshSpec {
    pub name: &'static str,
    pub geometry: Geometry,
    pub material: MaterialId,
    pub position: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl MeshSpec {
    fn new(name: &'static str, geometry: Geometry, material: MaterialId) -> Self {
        Self {
            name,
            geometry,
            material,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    fn shadowed(mut self) -> Self {
        self.cast_shadow = true;
        self.receive_shadow = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Spot,
    Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: u32,
    pub intensity: f32,
    pub position: Vec3,
}

/// Gun barrel cross-section, revolved into the barrel mesh.
const GUN_PROFILE: [(f32, f32); 8] = [
    (12.0, 0.0),
    (11.0, 50.0),
    (13.0, 51.0),
    (12.0, 70.0),
    (10.0, 71.0),
    (9.0, 90.0),
    (6.0, 90.0),
    (6.0, 0.0),
];

/// Parts of the turret assembly, relative to the turret origin.
pub fn turret_parts() -> Vec<MeshSpec> {
    let base = MeshSpec::new(
        "base",
        Geometry::Cylinder {
            radius_top: 65.0,
            radius_bottom: 65.0,
            height: 6.0,
            radial_segments: 32,
            height_segments: 1,
            open_ended: false,
        },
        MaterialId::Metal,
    )
    .at(Vec3::new(0.0, 3.0, 0.0))
    .shadowed();

    let mut collar = MeshSpec::new(
        "collar",
        Geometry::Cylinder {
            radius_top: 64.0,
            radius_bottom: 70.0,
            height: 16.0,
            radial_segments: 8,
            height_segments: 1,
            open_ended: false,
        },
        MaterialId::MetalWire,
    )
    .at(Vec3::new(0.0, 8.0, 0.0))
    .shadowed();
    // Half an octagon step so the wire edges sit between the base seams.
    collar.rotation = Vec3::new(0.0, FRAC_PI_8, 0.0);

    let dome = MeshSpec::new("dome", Geometry::hemisphere(50.0, 32, 32), MaterialId::Metal)
        .at(Vec3::new(0.0, 15.0, 0.0))
        .shadowed();

    let mut gun = MeshSpec::new(
        "gun",
        Geometry::Lathe {
            profile: GUN_PROFILE
                .iter()
                .map(|&(x, z)| Vec3::new(x, 0.0, z))
                .collect(),
            segments: 4,
        },
        MaterialId::MetalFlat,
    )
    .at(Vec3::new(0.0, 38.0, -90.0 * PI / 180.0))
    .shadowed();
    gun.scale = Vec3::splat(1.2);

    vec![base, collar, dome, gun]
}

/// Shell mesh shared by every enemy.
pub fn enemy_parts() -> Vec<MeshSpec> {
    vec![MeshSpec::new("shell", Geometry::hemisphere(40.0, 16, 4), MaterialId::Badguy).shadowed()]
}

/// Static environment plus the camera rig. Built once at startup.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: CameraRig,
    pub ground: MeshSpec,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn standard() -> Self {
        let mut ground = MeshSpec::new(
            "ground",
            Geometry::Plane {
                width: 4000.0,
                height: 4000.0,
                width_segments: 100,
                height_segments: 100,
            },
            MaterialId::Ground,
        );
        ground.rotation = Vec3::new(-FRAC_PI_2, 0.0, 0.0);
        ground.receive_shadow = true;

        let lights = vec![
            // Key light.
            Light {
                kind: LightKind::Spot,
                color: 0xFFFFFF,
                intensity: 0.8,
                position: Vec3::new(500.0, 500.0, 500.0),
            },
            // Fill lights.
            Light {
                kind: LightKind::Point,
                color: 0xFF6666,
                intensity: 0.5,
                position: Vec3::new(-1000.0, 300.0, 0.0),
            },
            Light {
                kind: LightKind::Point,
                color: 0xDDAA55,
                intensity: 0.3,
                position: Vec3::new(1000.0, 300.0, -300.0),
            },
        ];

        Self {
            camera: CameraRig::default(),
            ground,
            lights,
        }
    }
}
