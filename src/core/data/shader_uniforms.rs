use bytemuck::{Pod, Zeroable};
use thiserror::Error;

use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Projection, Viewport};
use crate::core::fractals::mandelbrot::escape_time::escape_time;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum UniformsError {
    #[error("shader uniforms need a centred projection, bounding boxes are CPU only")]
    UnsupportedProjection,
    #[error("iteration budget {0} does not fit a shader int")]
    BudgetOverflow(u32),
}

/// Uniform block consumed by the fragment shader once per frame.
///
/// Field order and names follow the shader interface: `window_size`,
/// `centre`, `scale`, `thresh`, `curiter`. Padded to 32 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ShaderUniforms {
    pub window_size: [f32; 2],
    pub centre: [f32; 2],
    pub scale: f32,
    pub thresh: f32,
    pub curiter: i32,
    pub _pad: u32,
}

impl ShaderUniforms {
    pub fn from_frame(
        viewport: &Viewport,
        budget: IterationBudget,
        threshold: f64,
    ) -> Result<Self, UniformsError> {
        let Projection::Centred { centre, scale } = viewport.projection() else {
            return Err(UniformsError::UnsupportedProjection);
        };
        let curiter = i32::try_from(budget.current())
            .map_err(|_| UniformsError::BudgetOverflow(budget.current()))?;
        let screen = viewport.screen();

        Ok(Self {
            window_size: [screen.width() as f32, screen.height() as f32],
            centre: [centre.real as f32, centre.imag as f32],
            scale: scale as f32,
            thresh: threshold as f32,
            curiter,
            _pad: 0,
        })
    }

    /// CPU reference for what the shader computes at a fragment: single
    /// precision, centred transform, same escape loop.
    #[must_use]
    pub fn evaluate(&self, fragment: Point) -> u32 {
        let half_width = (self.window_size[0] * 0.5).floor();
        let half_height = (self.window_size[1] * 0.5).floor();
        let re = (fragment.x as f32 - half_width) * self.scale + self.centre[0];
        let im = (fragment.y as f32 - half_height) * self.scale + self.centre[1];

        escape_time(re, im, self.curiter.max(0) as u32, self.thresh)
    }
}
