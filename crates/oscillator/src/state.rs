use smd_core::StepIntegrable;

/// Displacement and velocity of the mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub displacement: f64,
    pub velocity: f64,
}

impl State {
    /// The fixed starting state: released from rest at a displacement of 2.
    pub const INITIAL: Self = Self {
        displacement: 2.0,
        velocity: 0.0,
    };
}

/// Time derivative of a [`State`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivative {
    /// Rate of change of displacement, i.e. the velocity.
    pub displacement: f64,
    /// Rate of change of velocity, i.e. the acceleration.
    pub velocity: f64,
}

impl StepIntegrable<f64> for State {
    type Derivative = Derivative;

    fn step(&self, derivative: Derivative, dt: f64) -> Self {
        Self {
            displacement: self.displacement + dt * derivative.displacement,
            velocity: self.velocity + dt * derivative.velocity,
        }
    }
}

/// One point of a trajectory: the state at a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub state: State,
}

impl Sample {
    /// The first sample of every run, `(t = 0, x = 2, v = 0)`.
    pub const INITIAL: Self = Self {
        time: 0.0,
        state: State::INITIAL,
    };

    #[must_use]
    pub fn displacement(&self) -> f64 {
        self.state.displacement
    }

    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }
}
