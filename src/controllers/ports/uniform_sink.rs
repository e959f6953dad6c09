use crate::core::data::shader_uniforms::ShaderUniforms;

/// Receives the per-frame uniform block when the escape loop runs on the GPU.
pub trait UniformSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn upload(&mut self, uniforms: &ShaderUniforms) -> Result<(), Self::Error>;
}
