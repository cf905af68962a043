use crate::bodies::{Body, BodyParams};
use crate::core::{
    BodyEvent, BodyEventType, BodyHandle, BodyStorage, Command, CommandSender, ContactEvent,
    EventQueue, ForceScaling, InsertionThrottle, ManualScheduler, MotionState, NullRenderer,
    Renderer, Scheduler, SimulationConfig,
};
use crate::error::PhysicsError;
use crate::geometry::point_distance;
use crate::integration::{Bounds, Integrator, SymplecticEulerIntegrator};
use crate::interaction::{InteractionMode, InteractionParams};
use crate::math::Vector2;
use crate::Result;

use log::{debug, trace, warn};

/// The simulation: an ordered body collection plus the controls that drive it.
///
/// A world is owned by its host. All mutation goes through `&mut self`, so a
/// tick can never interleave with an insertion or removal; hosts that receive
/// input on other threads push [`Command`]s through a [`CommandSender`] and
/// the world applies them at the start of the next tick.
pub struct World<R: Renderer = NullRenderer, S: Scheduler = ManualScheduler> {
    /// All bodies, in insertion order
    bodies: BodyStorage,

    /// Containment area
    bounds: Bounds,

    /// Pairwise interaction in use
    mode: InteractionMode,

    /// Running or stopped
    state: MotionState,

    /// Multiplier applied to every frame's elapsed time
    speed_factor: f64,

    /// Timestamp (ms) of the previous tick
    last_tick_time: f64,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Events produced since the start of the last tick
    events: EventQueue,

    /// Commands waiting for the next tick
    commands: CommandSender,

    /// Limits drag insertions
    throttle: InsertionThrottle,

    /// Position integrator
    integrator: Box<dyn Integrator>,

    renderer: R,
    scheduler: S,
}

impl World {
    /// Creates a stopped world with default settings and no-op collaborators
    pub fn new() -> Self {
        Self::build(SimulationConfig::default(), NullRenderer, ManualScheduler::new())
    }

    /// Creates a world with the given configuration and no-op collaborators
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        Self::with_collaborators(config, NullRenderer, ManualScheduler::new())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer, S: Scheduler> World<R, S> {
    /// Creates a world that renders through `renderer` and asks `scheduler`
    /// for ticks while running
    pub fn with_collaborators(config: SimulationConfig, renderer: R, scheduler: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, renderer, scheduler))
    }

    fn build(config: SimulationConfig, renderer: R, scheduler: S) -> Self {
        Self {
            bodies: BodyStorage::new(),
            bounds: Bounds::saturating(config.width, config.height),
            mode: config.mode,
            state: MotionState::Stopped,
            speed_factor: config.speed_factor,
            last_tick_time: 0.0,
            throttle: InsertionThrottle::new(config.drag_insert_interval_ms),
            config,
            events: EventQueue::new(),
            commands: CommandSender::new(),
            integrator: Box::new(SymplecticEulerIntegrator::new()),
            renderer,
            scheduler,
        }
    }

    fn interaction_params(&self, dt_ms: f64) -> InteractionParams {
        let impulse_scale = match self.config.force_scaling {
            ForceScaling::PerTick => 1.0,
            ForceScaling::PerSecond => dt_ms / 1000.0,
        };
        InteractionParams {
            coulomb_constant: self.config.coulomb_constant,
            impulse_scale,
        }
    }

    /// Builds a circle from template parameters and inserts it at `position`
    pub fn add(&mut self, position: Vector2, params: BodyParams) -> Result<BodyHandle> {
        let body = Body::circle(position, params).map_err(|err| {
            warn!("rejected body at {}: {}", position, err);
            err
        })?;
        Ok(self.add_body(body))
    }

    /// Inserts a drag-placed circle, unless another drag insertion happened
    /// less than the configured interval before `now` (ms). Returns
    /// `Ok(None)` when throttled.
    pub fn add_dragged(&mut self, position: Vector2, params: BodyParams, now: f64) -> Result<Option<BodyHandle>> {
        let body = Body::circle(position, params).map_err(|err| {
            warn!("rejected dragged body at {}: {}", position, err);
            err
        })?;
        if !self.throttle.try_acquire(now) {
            trace!("drag insertion at {} throttled", position);
            return Ok(None);
        }
        Ok(Some(self.add_body(body)))
    }

    /// Inserts a body.
    ///
    /// The new body first interacts, under the current mode, with every body
    /// already present (as the first argument of each pair), so the next frame
    /// already shows any bounce or repulsion. It is then appended and the
    /// renderer is handed the updated list.
    pub fn add_body(&mut self, mut body: Body) -> BodyHandle {
        // insertion has no frame of its own; time-scaled forces use a nominal one
        let params = self.interaction_params(self.config.nominal_frame_ms);
        let mode = self.mode;

        let mut contacts = Vec::new();
        for (other, existing) in self.bodies.iter_mut() {
            let outcome = mode.apply(&mut body, existing, &params);
            if outcome.is_contact() {
                contacts.push((other, outcome));
            }
        }

        let handle = self.bodies.add(body);
        debug!("added body {:?} ({} bodies, {} contacts)", handle, self.bodies.len(), contacts.len());

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Added,
            body: handle,
        });
        for (other, outcome) in contacts {
            self.events.add_contact_event(ContactEvent {
                body_a: handle,
                body_b: other,
                outcome,
            });
        }

        self.renderer.render(self.bodies.as_slice());
        handle
    }

    /// Removes the body closest to `position` (center distance for circles,
    /// segment distance for walls). Nothing is removed when the closest body
    /// is further than the removal threshold; ties go to the earlier body.
    pub fn remove_nearest(&mut self, position: Vector2) -> Option<Body> {
        let mut nearest: Option<(usize, f64)> = None;
        for (index, body) in self.bodies.as_slice().iter().enumerate() {
            let distance = point_distance(body, position);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }

        let (index, distance) = nearest?;
        if distance > self.config.removal_threshold {
            return None;
        }

        let (handle, body) = self.bodies.remove_at(index)?;
        debug!("removed body {:?} at distance {:.2}", handle, distance);
        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Removed,
            body: handle,
        });
        Some(body)
    }

    /// Removes a body by handle
    pub fn remove(&mut self, handle: BodyHandle) -> Result<Body> {
        let body = self.bodies.remove(handle)?;
        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Removed,
            body: handle,
        });
        Ok(body)
    }

    /// Removes every body
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.events.clear();
    }

    /// Queues a command for the next tick
    pub fn submit(&self, command: Command) {
        self.commands.send(command);
    }

    /// Returns a sender that queues commands for this world
    pub fn command_sender(&self) -> CommandSender {
        self.commands.clone()
    }

    fn apply_command(&mut self, command: Command) {
        let result = match command {
            Command::Add { position, params } => self.add(position, params).map(|_| ()),
            Command::AddDragged { position, params, at } => {
                self.add_dragged(position, params, at).map(|_| ())
            }
            Command::RemoveNearest { position } => {
                self.remove_nearest(position);
                Ok(())
            }
            Command::SetBounds { width, height } => self.set_bounds(width, height),
            Command::SetMode(mode) => {
                self.set_mode(mode);
                Ok(())
            }
        };

        if let Err(err) = result {
            warn!("queued command failed: {}", err);
        }
    }

    /// Advances the simulation to time `now` (ms).
    ///
    /// Queued commands are applied first. The elapsed time since the previous
    /// tick is replaced by the nominal frame when it is stale, then scaled by
    /// the speed factor. Every pair `i < j` interacts in index order, every
    /// body is integrated, and the renderer receives the result. While running,
    /// the scheduler is asked for the next tick.
    pub fn tick(&mut self, now: f64) {
        self.events.clear();
        for command in self.commands.drain() {
            self.apply_command(command);
        }

        let mut elapsed = (now - self.last_tick_time).max(0.0);
        if !elapsed.is_finite() || elapsed > self.config.stale_frame_ms {
            elapsed = self.config.nominal_frame_ms;
        }
        let mut dt = elapsed * self.speed_factor;
        if !dt.is_finite() {
            dt = self.config.nominal_frame_ms;
        }
        self.last_tick_time = now;

        let params = self.interaction_params(dt);
        let mode = self.mode;
        let count = self.bodies.len();
        trace!("tick at {:.1}ms: dt={:.2}ms, {} bodies, {:?}", now, dt, count, mode);

        for i in 0..count {
            for j in (i + 1)..count {
                let (Some(handle_a), Some(handle_b)) = (self.bodies.handle_at(i), self.bodies.handle_at(j)) else {
                    continue;
                };
                let (a, b) = self.bodies.pair_mut(i, j);
                let outcome = mode.apply(a, b, &params);
                if outcome.is_contact() {
                    self.events.add_contact_event(ContactEvent {
                        body_a: handle_a,
                        body_b: handle_b,
                        outcome,
                    });
                }
            }
        }

        for body in self.bodies.as_mut_slice() {
            self.integrator.integrate(body, &self.bounds, dt);
        }

        self.renderer.render(self.bodies.as_slice());

        if self.state == MotionState::Running {
            self.scheduler.schedule_next_tick();
        }
    }

    /// Flips between stopped and running and returns the new state.
    ///
    /// Starting requests the first tick. Stopping lets an already requested
    /// tick run but no further one is requested.
    pub fn toggle(&mut self) -> MotionState {
        self.state = match self.state {
            MotionState::Stopped => {
                self.scheduler.schedule_next_tick();
                MotionState::Running
            }
            MotionState::Running => MotionState::Stopped,
        };
        debug!("motion state: {:?}", self.state);
        self.state
    }

    /// Multiplies the speed factor by `factor`.
    ///
    /// The factor is left unchanged when `factor` or the resulting product is
    /// not a finite positive number.
    pub fn set_speed(&mut self, factor: f64) -> Result<()> {
        let product = self.speed_factor * factor;
        if !factor.is_finite() || factor <= 0.0 || !product.is_finite() || product <= 0.0 {
            warn!("ignoring speed factor {} (current {})", factor, self.speed_factor);
            return Err(PhysicsError::InvalidParameter(format!(
                "speed factor must stay a positive number, got {} x {}",
                self.speed_factor, factor
            )));
        }
        self.speed_factor = product;
        debug!("speed factor: {}", self.speed_factor);
        Ok(())
    }

    /// Resizes the world. Bodies stay where they are; only later containment
    /// uses the new size.
    pub fn set_bounds(&mut self, width: f64, height: f64) -> Result<()> {
        self.bounds = Bounds::new(width, height)?;
        debug!("bounds: {}x{}", width, height);
        Ok(())
    }

    /// Selects the interaction used from the next tick or insertion on
    pub fn set_mode(&mut self, mode: InteractionMode) {
        self.mode = mode;
        debug!("interaction mode: {:?}", mode);
    }

    /// Switches to the other interaction mode and returns it
    pub fn toggle_mode(&mut self) -> InteractionMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Returns the bodies in iteration order
    pub fn bodies(&self) -> &[Body] {
        self.bodies.as_slice()
    }

    /// Returns the handles in iteration order
    pub fn handles(&self) -> &[BodyHandle] {
        self.bodies.handles()
    }

    /// Gets a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.bodies.get_body(handle)
    }

    /// Returns the number of bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the containment area
    pub fn get_bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the interaction mode
    pub fn get_mode(&self) -> InteractionMode {
        self.mode
    }

    /// Returns the motion state
    pub fn get_state(&self) -> MotionState {
        self.state
    }

    /// Returns whether the world is running
    pub fn is_running(&self) -> bool {
        self.state == MotionState::Running
    }

    /// Returns the speed factor
    pub fn get_speed_factor(&self) -> f64 {
        self.speed_factor
    }

    /// Returns the timestamp of the last tick
    pub fn get_last_tick_time(&self) -> f64 {
        self.last_tick_time
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the events produced since the start of the last tick
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Returns the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Returns the scheduler
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns the scheduler mutably
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Sum of all body speeds divided by ten, as shown on the readout
    pub fn temperature(&self) -> f64 {
        self.bodies
            .as_slice()
            .iter()
            .map(|body| body.get_velocity().length())
            .sum::<f64>()
            / 10.0
    }

    /// Total kinetic energy of the dynamic circles
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .as_slice()
            .iter()
            .filter_map(|body| {
                body.get_inertial_mass()
                    .map(|mass| 0.5 * mass * body.get_velocity().length_squared())
            })
            .sum()
    }

    /// Total linear momentum of the dynamic circles
    pub fn momentum(&self) -> Vector2 {
        self.bodies
            .as_slice()
            .iter()
            .filter_map(|body| body.get_inertial_mass().map(|mass| body.get_velocity() * mass))
            .fold(Vector2::zero(), |total, p| total + p)
    }
}
