use std::path::Path;

/// Concat demuxer manifest, one `file '<path>'` line per input. Line order
/// is the final audio timeline, so callers must pass paths in request order.
pub fn concat_manifest(paths: &[impl AsRef<Path>]) -> String {
    paths
        .iter()
        .map(|p| format!("file '{}'\n", p.as_ref().display()))
        .collect()
}

/// Stream-copy concatenation. No re-encode: the inputs are assumed to share
/// a compatible codec and container, and copying keeps this step fast.
pub fn concat_args(list: &Path, output: &Path) -> Vec<String> {
    vec![
        "-f".into(),
        "concat".into(),
        "-safe".into(),
        "0".into(),
        "-i".into(),
        list.display().to_string(),
        "-c".into(),
        "copy".into(),
        "-y".into(),
        output.display().to_string(),
    ]
}

/// Loop the still image as the video track, mux the combined audio under it.
/// `-t` pins the output length; `-shortest` stops the encoder once the
/// audio runs out within that window.
pub fn compose_args(image: &Path, audio: &Path, duration_secs: f64, output: &Path) -> Vec<String> {
    vec![
        "-loop".into(),
        "1".into(),
        "-i".into(),
        image.display().to_string(),
        "-i".into(),
        audio.display().to_string(),
        "-c:v".into(),
        "libx264".into(),
        "-preset".into(),
        "ultrafast".into(),
        "-tune".into(),
        "stillimage".into(),
        "-c:a".into(),
        "aac".into(),
        "-b:a".into(),
        "192k".into(),
        "-pix_fmt".into(),
        "yuv420p".into(),
        "-shortest".into(),
        "-t".into(),
        duration_secs.to_string(),
        "-y".into(),
        output.display().to_string(),
    ]
}

pub fn probe_duration_args(input: &Path) -> Vec<String> {
    vec![
        "-v".into(),
        "error".into(),
        "-show_entries".into(),
        "format=duration".into(),
        "-of".into(),
        "default=noprint_wrappers=1:nokey=1".into(),
        input.display().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn manifest_lines_follow_input_order() {
        let paths = [
            PathBuf::from("/tmp/job/audio_0.mp3"),
            PathBuf::from("/tmp/job/audio_1.mp3"),
            PathBuf::from("/tmp/job/audio_2.mp3"),
        ];
        let manifest = concat_manifest(&paths);
        assert_eq!(
            manifest,
            "file '/tmp/job/audio_0.mp3'\nfile '/tmp/job/audio_1.mp3'\nfile '/tmp/job/audio_2.mp3'\n"
        );
    }

    #[test]
    fn concat_uses_the_demuxer_with_stream_copy() {
        let args = concat_args(
            Path::new("/tmp/job/concat.txt"),
            Path::new("/tmp/job/combined_audio.mp3"),
        );
        assert_eq!(
            args,
            vec![
                "-f",
                "concat",
                "-safe",
                "0",
                "-i",
                "/tmp/job/concat.txt",
                "-c",
                "copy",
                "-y",
                "/tmp/job/combined_audio.mp3",
            ]
        );
    }

    #[test]
    fn compose_pins_the_duration_and_tunes_for_a_still_image() {
        let args = compose_args(
            Path::new("/tmp/job/image.jpg"),
            Path::new("/tmp/job/combined_audio.mp3"),
            120.0,
            Path::new("/tmp/job/output.mp4"),
        );
        assert_eq!(
            args,
            vec![
                "-loop",
                "1",
                "-i",
                "/tmp/job/image.jpg",
                "-i",
                "/tmp/job/combined_audio.mp3",
                "-c:v",
                "libx264",
                "-preset",
                "ultrafast",
                "-tune",
                "stillimage",
                "-c:a",
                "aac",
                "-b:a",
                "192k",
                "-pix_fmt",
                "yuv420p",
                "-shortest",
                "-t",
                "120",
                "-y",
                "/tmp/job/output.mp4",
            ]
        );
    }

    #[test]
    fn fractional_durations_keep_their_precision() {
        let args = compose_args(
            Path::new("i.jpg"),
            Path::new("a.mp3"),
            93.5,
            Path::new("o.mp4"),
        );
        assert!(args.contains(&"93.5".to_string()));
    }
}
