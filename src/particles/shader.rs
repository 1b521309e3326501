use raylib::prelude::*;

// Slow, low-contrast colour field over normalized screen coordinates.
pub const BACKDROP_FS: &str = r#"#version 330

in vec2 fragTexCoord;
in vec4 fragColor;

uniform float time;
uniform vec2 resolution;

out vec4 finalColor;

void main()
{
    vec2 uv = gl_FragCoord.xy / max(resolution, vec2(1.0));
    vec2 p = uv - 0.5;

    float wave = sin(p.x * 3.0 + time * 0.6) * 0.5 + cos(p.y * 4.0 - time * 0.4) * 0.5;
    float glow = 0.25 - length(p) * 0.35;

    vec3 base = vec3(0.02, 0.03, 0.07);
    vec3 tint = vec3(0.10 + 0.05 * sin(time * 0.3), 0.04, 0.16 + 0.04 * cos(time * 0.2));

    finalColor = vec4(base + tint * (wave * 0.15 + glow), 1.0);
}
"#;

/// Backdrop shader with cached uniform locations.
pub struct Backdrop {
    shader: Shader,
    time_loc: i32,
    resolution_loc: i32,
}

impl Backdrop {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread) -> Self {
        let shader = rl.load_shader_from_memory(thread, None, Some(BACKDROP_FS));
        let time_loc = shader.get_shader_location("time");
        let resolution_loc = shader.get_shader_location("resolution");

        Self {
            shader,
            time_loc,
            resolution_loc,
        }
    }

    pub fn set_time(&mut self, time: f32) {
        self.shader.set_shader_value(self.time_loc, time);
    }

    pub fn set_resolution(&mut self, resolution: Vector2) {
        self.shader.set_shader_value(self.resolution_loc, resolution);
    }

    pub fn draw(&mut self, d: &mut RaylibDrawHandle, width: i32, height: i32) {
        let mut s = d.begin_shader_mode(&mut self.shader);
        s.draw_rectangle(0, 0, width, height, Color::WHITE);
    }
}
