//! Headless demo driver
//!
//! Runs the simulation for a few seconds at a fixed timestep against a
//! null sink and logs where the ball ends up. Real hosts replace this
//! with a window, an event loop, and a proper renderer.

use spinball::consts::SIM_DT;
use spinball::draw::NullSink;
use spinball::params::Params;
use spinball::sim::World;

fn main() {
    env_logger::init();

    let params = Params::default();
    log::info!("parameters:\n{}", params.dump());

    let mut world = World::new(params);
    let mut sink = NullSink;

    let ticks = 5 * 120; // five simulated seconds at 120 Hz
    for tick in 0..ticks {
        world.update(SIM_DT);
        world.render(&mut sink);
        if tick % 120 == 0 {
            log::info!(
                "t={:.1}s ball at ({:.1}, {:.1}) vel ({:.1}, {:.1})",
                tick as f32 * SIM_DT,
                world.ball.body.pos.x,
                world.ball.body.pos.y,
                world.ball.body.vel.x,
                world.ball.body.vel.y
            );
        }
    }

    println!(
        "after {:.1}s: ball at ({:.1}, {:.1})",
        ticks as f32 * SIM_DT,
        world.ball.body.pos.x,
        world.ball.body.pos.y
    );
}
