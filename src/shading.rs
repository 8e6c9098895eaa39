use crate::math::approx_eq::EPSILON;
use crate::math::{color::Color, vector::Vector};
use crate::render::{intersection::HitRecord, ray::Ray};
use crate::scene::Scene;
use crate::scene::texture::Texture;

/// How a surface responds to light. Lambertian and Phong gather the
/// scene lights directly; Mirror and Glass spawn secondary rays and
/// recurse through the scene up to its depth cap.
#[derive(Debug, Clone, PartialEq)]
pub enum Shader {
    Lambertian {
        texture: Texture,
    },
    Phong {
        texture: Texture,
        specular: Color,
        shininess: f64,
    },
    Mirror {
        reflectance: Color,
    },
    Glass {
        index_of_refraction: f64,
    },
}

impl Shader {
    pub fn lambertian(texture: Texture) -> Self {
        Shader::Lambertian { texture }
    }

    pub fn phong(texture: Texture, specular: Color, shininess: f64) -> Self {
        Shader::Phong {
            texture,
            specular,
            shininess,
        }
    }

    pub fn mirror(reflectance: Color) -> Self {
        Shader::Mirror { reflectance }
    }

    pub fn glass(index_of_refraction: f64) -> Self {
        Shader::Glass { index_of_refraction }
    }
}

impl Default for Shader {
    fn default() -> Self {
        Shader::Lambertian {
            texture: Texture::default(),
        }
    }
}

/// Color of the hit as seen along `ray`. `depth` counts the secondary
/// bounces taken so far.
pub fn shade(scene: &Scene, hit: &HitRecord, ray: &Ray, depth: usize) -> Color {
    match hit.surface().shader() {
        Shader::Lambertian { texture } => shade_lambertian(scene, hit, texture),
        Shader::Phong {
            texture,
            specular,
            shininess,
        } => shade_phong(scene, hit, ray, texture, *specular, *shininess),
        Shader::Mirror { reflectance } => shade_mirror(scene, hit, ray, depth, *reflectance),
        Shader::Glass {
            index_of_refraction,
        } => shade_glass(scene, hit, ray, depth, *index_of_refraction),
    }
}

/// Diffuse contribution summed over the scene lights. Directional and
/// point lights are shadowed; ambient light always applies.
fn shade_lambertian(scene: &Scene, hit: &HitRecord, texture: &Texture) -> Color {
    let diffuse = texture.color_at(hit.uv());
    let mut color = Color::black();

    for light in scene.lights() {
        let Some((to_light, distance)) = light.incident_at(hit.point()) else {
            color += light.intensity() * diffuse;
            continue;
        };

        let shadow_ray = Ray::new(hit.over_point(), to_light);
        if scene.is_occluded(&shadow_ray, distance) {
            continue;
        }

        let lambert = hit.normal().dot(to_light).max(0.);
        color += light.intensity() * diffuse * lambert;
    }
    color
}

fn shade_phong(
    scene: &Scene,
    hit: &HitRecord,
    ray: &Ray,
    texture: &Texture,
    specular: Color,
    shininess: f64,
) -> Color {
    let diffuse = texture.color_at(hit.uv());
    let to_eye = -ray.direction().normalize();
    let mut color = Color::black();

    for light in scene.lights() {
        let Some((to_light, distance)) = light.incident_at(hit.point()) else {
            color += light.intensity() * diffuse;
            continue;
        };

        let shadow_ray = Ray::new(hit.over_point(), to_light);
        if scene.is_occluded(&shadow_ray, distance) {
            continue;
        }

        let lambert = hit.normal().dot(to_light);
        if lambert <= 0. {
            continue;
        }
        color += light.intensity() * diffuse * lambert;

        let reflected = (-to_light).reflect(hit.normal());
        let highlight = reflected.dot(to_eye).max(0.).powf(shininess);
        color += light.intensity() * specular * highlight;
    }
    color
}

fn shade_mirror(
    scene: &Scene,
    hit: &HitRecord,
    ray: &Ray,
    depth: usize,
    reflectance: Color,
) -> Color {
    if depth >= scene.max_recursive_depth() {
        return Color::black();
    }

    let direction = ray.direction().normalize().reflect(hit.normal());
    let reflected_ray = Ray::new(hit.over_point(), direction);

    reflectance * scene.color_at_depth(&reflected_ray, depth + 1)
}

fn shade_glass(
    scene: &Scene,
    hit: &HitRecord,
    ray: &Ray,
    depth: usize,
    index_of_refraction: f64,
) -> Color {
    if depth >= scene.max_recursive_depth() {
        return Color::black();
    }

    let direction = ray.direction().normalize();
    let mut normal = hit.normal();
    // the geometric normal points outward; flip it (and the index
    // ratio) when the ray leaves the medium
    let eta = if direction.dot(normal) > 0. {
        normal = -normal;
        index_of_refraction
    } else {
        1. / index_of_refraction
    };
    let cos_i = -direction.dot(normal);

    let reflected_ray = Ray::new(hit.point() + normal * EPSILON, direction.reflect(normal));

    let Some(refracted) = refracted_direction(direction, normal, eta) else {
        // total internal reflection
        return scene.color_at_depth(&reflected_ray, depth + 1);
    };

    let refracted_ray = Ray::new(hit.point() - normal * EPSILON, refracted);

    let fresnel = schlick_reflectance(cos_i, eta);
    scene.color_at_depth(&reflected_ray, depth + 1) * fresnel
        + scene.color_at_depth(&refracted_ray, depth + 1) * (1. - fresnel)
}

/// Refraction of unit direction `d` at a surface with unit normal `n`
/// facing against `d`, for the index ratio `eta` = n_from / n_to.
/// `None` when the angle exceeds the critical angle.
pub fn refracted_direction(d: Vector, n: Vector, eta: f64) -> Option<Vector> {
    let cos_i = -d.dot(n);
    let sin2_t = eta * eta * (1. - cos_i * cos_i);
    if sin2_t > 1. {
        return None;
    }

    let cos_t = (1. - sin2_t).sqrt();
    Some(d * eta + n * (eta * cos_i - cos_t))
}

/// Schlick's approximation of the Fresnel reflectance.
fn schlick_reflectance(cos_i: f64, eta: f64) -> f64 {
    let mut cos = cos_i;
    if eta > 1. {
        // leaving the denser medium; use the transmitted angle
        let sin2_t = eta * eta * (1. - cos_i * cos_i);
        if sin2_t > 1. {
            return 1.;
        }
        cos = (1. - sin2_t).sqrt();
    }

    let r0 = ((1. - eta) / (1. + eta)).powi(2);
    r0 + (1. - r0) * (1. - cos).powi(5)
}
