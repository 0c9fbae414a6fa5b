//! Property tests for the RIFF/WAVE reader.

use proptest::prelude::*;

use fwkit::domain::services::wav::{encode_pcm_wav, WavClip};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the WAV parser never panics on arbitrary bytes.
    #[test]
    fn property_wav_parse_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = WavClip::parse(&bytes);
    }

    /// PROPERTY: the frames of a canonical PCM file are returned untouched.
    #[test]
    fn property_wav_frames_are_preserved(
        frames in proptest::collection::vec(any::<u8>(), 0..256)
            .prop_map(|mut f| { f.truncate(f.len() & !1); f }),
        rate in 8_000u32..48_000,
    ) {
        let bytes = encode_pcm_wav(1, rate, 16, &frames);
        let clip = WavClip::parse(&bytes).unwrap();

        prop_assert!(clip.format.is_mono_16bit());
        prop_assert_eq!(clip.format.sample_rate, rate);
        prop_assert_eq!(clip.frames, frames.as_slice());
    }
}
