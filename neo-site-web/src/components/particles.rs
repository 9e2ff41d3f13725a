use neo_site_core::{Particle, effects::particle_keyframes};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use yew::prelude::*;

use crate::context::use_site;
use crate::dom;

/// Scattered floating dots behind the hero. Positions are rolled once per mount.
#[function_component(Particles)]
pub fn particles() -> Html {
    let count = use_site().map_or(50, |ctx| ctx.config.particle_count);
    let scene = use_memo(count, |&count| {
        let mut rng = ChaCha8Rng::seed_from_u64(dom::entropy_seed());
        let particles = Particle::scatter(count, &mut rng);
        (particles, particle_keyframes(&mut rng))
    });
    let (particles, keyframes) = &*scene;

    html! {
        <div id="particles" class="particles" aria-hidden="true">
            <style>{ keyframes.clone() }</style>
            { for particles.iter().map(|p| html! {
                <div class="particle" style={p.style()}></div>
            }) }
        </div>
    }
}
