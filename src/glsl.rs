//! GLSL ES 3.00 sources for the WebGL2 program.
//!
//! The fragment shader is generated from a [`SpiralConfig`] so its constants
//! always agree with the host evaluator in [`crate::shade`].

use std::fmt::Write;

use glam::Vec3;

use crate::config::SpiralConfig;

/// Attribute name of the clip-space quad corner.
pub const POSITION_ATTRIBUTE: &str = "position";
pub const RESOLUTION_UNIFORM: &str = "iResolution";
pub const TIME_UNIFORM: &str = "iTime";

/// Pass-through for a 2×2 clip-space quad.
pub const VERTEX_SHADER: &str = r"#version 300 es
in vec2 position;
out vec2 vUv;

void main() {
    vUv = position * 0.5 + 0.5;
    gl_Position = vec4(position, 0.0, 1.0);
}
";

const FRAGMENT_BODY: &str = r"
float rand(vec2 n) {
    return fract(sin(dot(n, vec2(12.9898, 4.1414))) * 43758.5453);
}

float noise(vec2 n) {
    const vec2 d = vec2(0.0, 1.0);
    vec2 b = floor(n), f = smoothstep(vec2(0.0), vec2(1.0), fract(n));
    return mix(mix(rand(b), rand(b + d.yx), f.x), mix(rand(b + d.xy), rand(b + d.yy), f.x), f.y);
}

vec2 c2p(vec2 p) {
    return vec2(length(p), atan(p.y, p.x));
}

vec2 p2c(vec2 polar) {
    return polar.x * vec2(cos(polar.y), sin(polar.y));
}

vec3 primaryShader(in vec2 fragCoord) {
    float globalTime = iTime * GLOBAL_SPEED;
    float m = min(iResolution.x, iResolution.y);
    vec2 p = (fragCoord / iResolution - 0.5) * (iResolution / m) * 2.0;
    vec2 polar = c2p(p);

    // Computed but not applied to the output.
    vec2 noiseSampleP = p2c(vec2(polar.x, polar.y + globalTime * NOISE_SPEED));
    vec2 displace = vec2(noise(noiseSampleP * NOISE_FREQ));

    polar.y += polar.x * FREQ + globalTime * BASE_SPEED;
    float pulse = sin(polar.x * PULSE_FREQ + globalTime * PULSE_SPEED);
    polar.y -= pow(pulse, PULSE_EXP) * PULSE_AMP;
    polar.y += (atan(p.y, p.x) - pulse * 5.0) * 5.0;
    p = p2c(polar);

    float bright = 1.0 - abs(p.y);
    bright += abs(p.x) * -0.2;
    bright *= 1.8;
    bright *= pow(clamp(p.x, 0.0, 0.5), 0.5);
    bright = pow(bright, 5.0);
    bright = clamp(bright, 0.0, 1.0);

    vec3 col = mix(DEEP_COLOR, LIGHT_COLOR, bright);
    col *= bright;
    return col;
}

vec3 superSample(in vec2 fragCoord) {
    vec3 result = vec3(0.0);
    float n = float(SUPERSAMPLING_FACTOR);
    for (int x = 0; x < SUPERSAMPLING_FACTOR; x++) {
        for (int y = 0; y < SUPERSAMPLING_FACTOR; y++) {
            vec2 offset = vec2(float(x) / n, float(y) / n);
            result += primaryShader(fragCoord + offset) / (n * n);
        }
    }
    return result;
}

void main() {
    fragColor = vec4(superSample(gl_FragCoord.xy), 1.0);
}
";

/// GLSL float literal; `Debug` keeps the trailing `.0` on whole numbers.
fn float(v: f32) -> String {
    format!("{v:?}")
}

fn vec3(v: Vec3) -> String {
    format!("vec3({}, {}, {})", float(v.x), float(v.y), float(v.z))
}

/// Builds the fragment shader with `config` inlined as constants.
pub fn fragment_shader(config: &SpiralConfig) -> String {
    let mut src = String::from(
        "#version 300 es\nprecision highp float;\n\n\
         uniform vec2 iResolution;\nuniform float iTime;\n\n\
         in vec2 vUv;\nout vec4 fragColor;\n\n",
    );

    let floats = [
        ("GLOBAL_SPEED", config.global_speed),
        ("FREQ", config.freq),
        ("BASE_SPEED", config.base_speed),
        ("NOISE_FREQ", config.noise_freq),
        ("NOISE_SPEED", config.noise_speed),
        ("NOISE_AMP", config.noise_amp),
        ("PULSE_FREQ", config.pulse_freq),
        ("PULSE_SPEED", config.pulse_speed),
        ("PULSE_EXP", config.pulse_exp),
        ("PULSE_AMP", config.pulse_amp),
    ];
    for (name, value) in floats {
        // Writing to a String cannot fail.
        let _ = writeln!(src, "const float {name} = {};", float(value));
    }
    let _ = writeln!(
        src,
        "const int SUPERSAMPLING_FACTOR = {};",
        config.supersampling.max(1)
    );
    let _ = writeln!(src, "const vec3 DEEP_COLOR = {};", vec3(config.deep_color));
    let _ = writeln!(src, "const vec3 LIGHT_COLOR = {};", vec3(config.light_color));

    src.push_str(FRAGMENT_BODY);
    src
}
