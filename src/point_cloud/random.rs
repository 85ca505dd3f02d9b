use bevy::prelude::*;
use rand::{
    prelude::Distribution,
    Rng,
};

use crate::point_cloud::buffers::PointSplat;


impl Distribution<PointSplat> for rand::distributions::Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PointSplat {
        PointSplat {
            position: Vec3::new(
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
            ),
            color: [
                rng.r#gen(),
                rng.r#gen(),
                rng.r#gen(),
                255,
            ],
            radius: rng.gen_range(0.005..0.1),
        }
    }
}

pub fn random_splats(n: usize) -> Vec<PointSplat> {
    let mut rng = rand::thread_rng();
    let mut splats: Vec<PointSplat> = Vec::with_capacity(n);

    for _ in 0..n {
        splats.push(rng.r#gen());
    }

    splats
}
