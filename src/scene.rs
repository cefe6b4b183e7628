use std::f32::consts::PI;

use glam::{EulerRot, Mat4, Quat, Vec3, Vec4Swizzles};

use crate::config::{
    CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, FALLBACK_VIEWPORT,
    PARTICLE_COUNT, PARTICLE_SPREAD, SHAPE_COUNT, SHAPE_SPREAD,
};

pub const ACCENT_COLORS: [u32; 4] = [0x00ffc8, 0x9333ea, 0xff0080, 0xfacc15];

const PARTICLE_SIZE: f32 = 0.02;
const PARTICLE_SPIN: f32 = 0.01;
const SHAPE_OPACITY: f32 = 0.3;
const SHININESS: i32 = 50;
const SPECULAR: f32 = 0.067;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::from_hex(0xffffff);

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    fn to_vec(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    fn css(rgb: Vec3, alpha: f32) -> String {
        let rgb = rgb.clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
        format!(
            "rgba({}, {}, {}, {alpha:.2})",
            rgb.x.round() as u8,
            rgb.y.round() as u8,
            rgb.z.round() as u8
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Icosahedron { radius: f32 },
    Cuboid { size: Vec3 },
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

const CUBOID_FACES: [[usize; 4]; 6] = [
    [0, 1, 3, 2],
    [4, 6, 7, 5],
    [0, 4, 5, 1],
    [2, 3, 7, 6],
    [0, 2, 6, 4],
    [1, 5, 7, 3],
];

impl ShapeKind {
    fn vertices(self) -> Vec<Vec3> {
        match self {
            Self::Icosahedron { radius } => {
                let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
                [
                    (-1.0, t, 0.0),
                    (1.0, t, 0.0),
                    (-1.0, -t, 0.0),
                    (1.0, -t, 0.0),
                    (0.0, -1.0, t),
                    (0.0, 1.0, t),
                    (0.0, -1.0, -t),
                    (0.0, 1.0, -t),
                    (t, 0.0, -1.0),
                    (t, 0.0, 1.0),
                    (-t, 0.0, -1.0),
                    (-t, 0.0, 1.0),
                ]
                .into_iter()
                .map(|(x, y, z)| Vec3::new(x, y, z).normalize() * radius)
                .collect()
            }
            Self::Cuboid { size } => {
                let half = size / 2.0;
                (0..8)
                    .map(|corner| {
                        Vec3::new(
                            if corner & 4 == 0 { -half.x } else { half.x },
                            if corner & 2 == 0 { -half.y } else { half.y },
                            if corner & 1 == 0 { -half.z } else { half.z },
                        )
                    })
                    .collect()
            }
        }
    }

    fn faces(self) -> Vec<Vec<usize>> {
        match self {
            Self::Icosahedron { .. } => ICOSAHEDRON_FACES.iter().map(|face| face.to_vec()).collect(),
            Self::Cuboid { .. } => CUBOID_FACES.iter().map(|face| face.to_vec()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: Color,
}

impl Shape {
    fn transform(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Camera {
    pub fn view_projection(&self) -> Mat4 {
        let projection =
            Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), self.aspect, self.near, self.far);
        projection * Mat4::from_translation(-self.position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<(f32, f32)>,
    pub fill: String,
    pub depth: f32,
}

/// Draw commands for one frame, in CSS pixels. Polygons are ordered back to
/// front.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub particles: Vec<ScreenPoint>,
    pub polygons: Vec<Polygon>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub(crate) particles: Vec<Vec3>,
    pub(crate) particle_spin: f32,
    pub(crate) shapes: Vec<Shape>,
    pub(crate) ambient: (Color, f32),
    pub(crate) lights: [PointLight; 2],
    pub(crate) camera: Camera,
    width: f32,
    height: f32,
}

fn spread(rng: &mut fastrand::Rng, extent: f32) -> f32 {
    (rng.f32() - 0.5) * extent
}

impl Scene {
    pub fn new(rng: &mut fastrand::Rng, width: f32, height: f32) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                Vec3::new(
                    spread(rng, PARTICLE_SPREAD),
                    spread(rng, PARTICLE_SPREAD),
                    spread(rng, PARTICLE_SPREAD),
                )
            })
            .collect();

        let shapes = (0..SHAPE_COUNT)
            .map(|index| {
                let kind = if index % 2 == 0 {
                    ShapeKind::Icosahedron {
                        radius: rng.f32() * 0.5 + 0.3,
                    }
                } else {
                    ShapeKind::Cuboid {
                        size: Vec3::new(
                            rng.f32() * 0.5 + 0.3,
                            rng.f32() * 0.5 + 0.3,
                            rng.f32() * 0.5 + 0.3,
                        ),
                    }
                };
                Shape {
                    kind,
                    position: Vec3::new(
                        spread(rng, SHAPE_SPREAD),
                        spread(rng, SHAPE_SPREAD),
                        spread(rng, SHAPE_SPREAD),
                    ),
                    rotation: Vec3::new(rng.f32() * PI, rng.f32() * PI, rng.f32() * PI),
                    color: Color::from_hex(ACCENT_COLORS[index % ACCENT_COLORS.len()]),
                }
            })
            .collect();

        let mut scene = Self {
            particles,
            particle_spin: 0.0,
            shapes,
            ambient: (Color::WHITE, 0.2),
            lights: [
                PointLight {
                    color: Color::from_hex(0x00ffc8),
                    intensity: 1.0,
                    position: Vec3::new(2.0, 2.0, 3.0),
                },
                PointLight {
                    color: Color::from_hex(0x9333ea),
                    intensity: 1.0,
                    position: Vec3::new(-3.0, -3.0, -3.0),
                },
            ],
            camera: Camera {
                fov_degrees: CAMERA_FOV_DEGREES,
                aspect: 1.0,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            },
            width: 1.0,
            height: 1.0,
        };
        scene.resize(width, height);
        scene
    }

    pub fn particles(&self) -> &[Vec3] {
        &self.particles
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Matches the projection to a new surface size. Degenerate sizes are
    /// clamped to one pixel so the aspect ratio stays finite.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.camera.aspect = self.width / self.height;
    }

    pub fn update(&mut self, elapsed: f32) {
        self.particle_spin = elapsed * PARTICLE_SPIN;

        for (index, shape) in self.shapes.iter_mut().enumerate() {
            let step = index as f32;
            shape.rotation.x += 0.005 + step * 0.001;
            shape.rotation.y += 0.008 + step * 0.001;
            shape.position.y += (elapsed * 0.2 + step).sin() * 0.001;
            shape.position.x += (elapsed * 0.15 + step).cos() * 0.001;
        }
    }

    fn to_screen(&self, view_projection: &Mat4, world: Vec3) -> Option<(f32, f32, f32)> {
        let clip = *view_projection * world.extend(1.0);
        if clip.w <= self.camera.near {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        if !(-1.0..=1.0).contains(&ndc.z) {
            return None;
        }
        let x = (ndc.x + 1.0) / 2.0 * self.width;
        let y = (1.0 - ndc.y) / 2.0 * self.height;
        Some((x, y, clip.w))
    }

    fn shade(&self, base: Color, center: Vec3, normal: Vec3) -> Vec3 {
        let base = base.to_vec();
        let (ambient_color, ambient_intensity) = self.ambient;
        let mut lit = base * ambient_color.to_vec() * ambient_intensity;
        let to_camera = (self.camera.position - center).normalize_or_zero();

        for light in &self.lights {
            let to_light = (light.position - center).normalize_or_zero();
            let diffuse = normal.dot(to_light).max(0.0) * light.intensity;
            let half = (to_light + to_camera).normalize_or_zero();
            let specular = normal.dot(half).max(0.0).powi(SHININESS) * light.intensity * SPECULAR;
            lit += base * light.color.to_vec() * diffuse + light.color.to_vec() * specular;
        }

        lit
    }

    pub fn frame(&self) -> Frame {
        let view_projection = self.camera.view_projection();
        let half_height = self.height / 2.0;
        let spin = Mat4::from_rotation_y(self.particle_spin);

        let particles = self
            .particles
            .iter()
            .filter_map(|particle| {
                let world = spin.transform_point3(*particle);
                let (x, y, depth) = self.to_screen(&view_projection, world)?;
                let size = (PARTICLE_SIZE * half_height / depth).max(0.5);
                Some(ScreenPoint { x, y, size })
            })
            .filter(|point| {
                point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
            })
            .collect();

        let mut polygons = Vec::new();
        for shape in &self.shapes {
            let transform = shape.transform();
            let vertices: Vec<Vec3> = shape
                .kind
                .vertices()
                .into_iter()
                .map(|vertex| transform.transform_point3(vertex))
                .collect();

            for face in shape.kind.faces() {
                let corners: Vec<Vec3> = face.iter().map(|&index| vertices[index]).collect();
                let center = corners.iter().copied().sum::<Vec3>() / corners.len() as f32;

                let mut normal = (corners[1] - corners[0]).cross(corners[2] - corners[0]).normalize_or_zero();
                if normal.dot(center - shape.position) < 0.0 {
                    normal = -normal;
                }
                if normal.dot(self.camera.position - center) <= 0.0 {
                    continue;
                }

                let projected: Option<Vec<(f32, f32, f32)>> = corners
                    .iter()
                    .map(|corner| self.to_screen(&view_projection, *corner))
                    .collect();
                let Some(projected) = projected else {
                    continue;
                };

                let depth = projected.iter().map(|(_, _, w)| *w).sum::<f32>() / projected.len() as f32;
                polygons.push(Polygon {
                    points: projected.into_iter().map(|(x, y, _)| (x, y)).collect(),
                    fill: Color::css(self.shade(shape.color, center, normal), SHAPE_OPACITY),
                    depth,
                });
            }
        }
        polygons.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        Frame {
            width: self.width,
            height: self.height,
            particles,
            polygons,
        }
    }
}

/// Size for the canvas: the host box while it has layout, else the viewport.
pub fn surface_size(host: (i32, i32), viewport: Option<(f64, f64)>) -> (f32, f32) {
    match (host, viewport) {
        ((width, height), _) if width > 0 && height > 0 => (width as f32, height as f32),
        (_, Some((width, height))) if width > 0.0 && height > 0.0 => {
            (width as f32, height as f32)
        }
        _ => FALLBACK_VIEWPORT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(&mut fastrand::Rng::with_seed(7), 1280.0, 720.0)
    }

    #[test]
    fn surface_prefers_host_then_viewport_then_default() {
        assert_eq!(surface_size((800, 600), Some((1920.0, 1080.0))), (800.0, 600.0));
        assert_eq!(surface_size((0, 0), Some((1920.0, 1080.0))), (1920.0, 1080.0));
        assert_eq!(surface_size((0, 600), None), FALLBACK_VIEWPORT);
    }

    #[test]
    fn builds_particle_cube_and_five_shapes() {
        let scene = scene();
        assert_eq!(scene.particles().len(), PARTICLE_COUNT);
        let bound = PARTICLE_SPREAD / 2.0;
        assert!(scene
            .particles()
            .iter()
            .all(|p| p.abs().max_element() <= bound));
        assert_eq!(scene.shapes().len(), SHAPE_COUNT);
    }

    #[test]
    fn shapes_alternate_kinds_and_cycle_accents() {
        let scene = scene();
        for (index, shape) in scene.shapes().iter().enumerate() {
            match shape.kind {
                ShapeKind::Icosahedron { radius } => {
                    assert_eq!(index % 2, 0);
                    assert!((0.3..=0.8).contains(&radius));
                }
                ShapeKind::Cuboid { size } => {
                    assert_eq!(index % 2, 1);
                    assert!(size.min_element() >= 0.3 && size.max_element() <= 0.8);
                }
            }
            assert_eq!(shape.color, Color::from_hex(ACCENT_COLORS[index % 4]));
            assert!(shape.position.abs().max_element() <= SHAPE_SPREAD / 2.0);
        }
    }

    #[test]
    fn same_seed_builds_same_scene() {
        assert_eq!(scene(), scene());
    }

    #[test]
    fn update_spins_faster_for_later_shapes() {
        let mut scene = scene();
        let before: Vec<Vec3> = scene.shapes().iter().map(|shape| shape.rotation).collect();
        scene.update(1.0);

        let deltas: Vec<f32> = scene
            .shapes()
            .iter()
            .zip(&before)
            .map(|(shape, old)| shape.rotation.x - old.x)
            .collect();
        assert!((deltas[0] - 0.005).abs() < 1e-6);
        assert!(deltas.windows(2).all(|pair| pair[1] > pair[0]));
        assert!((scene.particle_spin - 0.01).abs() < 1e-6);
    }

    #[test]
    fn drift_stays_small_per_frame() {
        let mut scene = scene();
        let before: Vec<Vec3> = scene.shapes().iter().map(|shape| shape.position).collect();
        scene.update(3.0);
        for (shape, old) in scene.shapes().iter().zip(before) {
            assert!((shape.position - old).abs().max_element() <= 0.001 + 1e-6);
        }
    }

    #[test]
    fn resize_tracks_aspect_ratio() {
        let mut scene = scene();
        scene.resize(800.0, 400.0);
        assert_eq!(scene.camera().aspect, 2.0);
        scene.resize(300.0, 0.0);
        assert!(scene.camera().aspect.is_finite());
    }

    #[test]
    fn projection_keeps_proportions_after_resize() {
        let mut scene = scene();
        for (width, height) in [(1280.0, 720.0), (400.0, 900.0), (1000.0, 1000.0)] {
            scene.resize(width, height);
            let view_projection = scene.camera().view_projection();
            let (cx, cy, _) = scene
                .to_screen(&view_projection, Vec3::ZERO)
                .expect("origin is visible");
            let (rx, _, _) = scene
                .to_screen(&view_projection, Vec3::new(0.5, 0.0, 0.0))
                .expect("right point is visible");
            let (_, uy, _) = scene
                .to_screen(&view_projection, Vec3::new(0.0, 0.5, 0.0))
                .expect("upper point is visible");
            assert!(((rx - cx) - (cy - uy)).abs() < 1e-2);
        }
    }

    #[test]
    fn frame_keeps_particles_on_screen() {
        let frame = scene().frame();
        assert!(!frame.particles.is_empty());
        assert!(frame
            .particles
            .iter()
            .all(|p| p.x >= 0.0 && p.x <= 1280.0 && p.y >= 0.0 && p.y <= 720.0 && p.size > 0.0));
    }

    #[test]
    fn shape_in_front_of_camera_yields_sorted_translucent_faces() {
        let mut scene = scene();
        scene.shapes.truncate(2);
        scene.shapes[0].position = Vec3::new(0.0, 0.0, -1.0);
        scene.shapes[1].position = Vec3::new(0.5, 0.0, -3.0);

        let frame = scene.frame();
        assert!(!frame.polygons.is_empty());
        assert!(frame.polygons.iter().all(|p| p.fill.ends_with("0.30)")));
        assert!(frame
            .polygons
            .windows(2)
            .all(|pair| pair[0].depth >= pair[1].depth));
    }

    #[test]
    fn shape_behind_camera_is_skipped() {
        let mut scene = scene();
        scene.shapes.truncate(1);
        scene.shapes[0].position = Vec3::new(0.0, 0.0, 4.0);
        assert!(scene.frame().polygons.is_empty());
    }

    #[test]
    fn lit_face_is_brighter_than_ambient() {
        let scene = scene();
        let toward_light = Vec3::new(2.0, 2.0, 3.0).normalize();
        let lit = scene.shade(Color::from_hex(0x00ffc8), Vec3::ZERO, toward_light);
        let unlit = Color::from_hex(0x00ffc8).to_vec() * 0.2;
        assert!(lit.y > unlit.y);
    }
}
