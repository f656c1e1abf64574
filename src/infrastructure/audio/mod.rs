pub mod audio_decoder;
mod symphonia_codec;
pub mod wav;

pub use symphonia_codec::SymphoniaAudioCodec;
