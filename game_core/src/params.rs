/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: i32 = 800;
    pub const COURT_HEIGHT: i32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_SPEED: i32 = 10; // pixels per tick while a key is held
    pub const PADDLE_MARGIN: i32 = 10; // gap between paddle and goal line

    // AI
    pub const AI_SPEED: i32 = 6; // max tracking step per tick

    // Ball
    pub const BALL_SIZE: i32 = 7;
    pub const BALL_SPEED_X: i32 = 7;
    pub const BALL_SPEED_Y: i32 = 5;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Loop
    pub const TICKS_PER_SECOND: u32 = 60;
}
