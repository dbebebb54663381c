use ferrite_xo::{
    layers::conv::convolve, ActivationFunction, CnnError, Filter, Label, MaxPool, Network,
    NetworkSpec, PixelGrid,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const EPS: f64 = 1e-9;

fn demo(name: &str) -> PixelGrid {
    let path = format!("{}/demos/{}", env!("CARGO_MANIFEST_DIR"), name);
    PixelGrid::load(path).unwrap()
}

fn random_grid(rng: &mut StdRng) -> PixelGrid {
    let rows = (0..9)
        .map(|_| (0..9).map(|_| if rng.gen_bool(0.5) { 1 } else { -1 }).collect())
        .collect();
    PixelGrid::from_rows(rows).unwrap()
}

#[test]
fn reference_x_is_classified_as_x() {
    let trace = Network::default().forward(&demo("x.txt")).unwrap();
    assert!((trace.confidence.x - 100.0).abs() < EPS);
    assert!((trace.confidence.o - 2500.0 / 81.0).abs() < EPS);
    assert_eq!(trace.prediction, Label::X);
}

#[test]
fn reference_o_is_classified_as_o() {
    let network = Network::default();
    let trace = network.forward(&demo("o.txt")).unwrap();
    assert!((trace.confidence.o - 100.0).abs() < EPS);
    assert!((trace.confidence.x - 500.0 / 13.0).abs() < EPS);
    assert_eq!(network.classify(&demo("o.txt")).unwrap(), Label::O);
}

#[test]
fn random_grids_keep_every_stage_invariant() {
    let mut rng = StdRng::seed_from_u64(2022);
    let network = Network::default();

    for _ in 0..100 {
        let trace = network.forward(&random_grid(&mut rng)).unwrap();

        assert_eq!(trace.feature_maps.len(), 3);
        assert!(trace.feature_maps.iter().all(|m| m.rows == 7 && m.cols == 7));
        assert!(trace.activated_maps.iter().flat_map(|m| m.data.iter().flatten()).all(|&v| v >= 0.0));
        assert!(trace.pooled_maps.iter().all(|m| m.rows == 4 && m.cols == 4));
        assert_eq!(trace.flat.len(), 48);

        let again: Vec<_> = trace.activated_maps.iter()
            .map(|m| ActivationFunction::ReLU.apply(m))
            .collect();
        assert_eq!(again, trace.activated_maps);

        let pooled_first = MaxPool.forward(&trace.activated_maps[0]);
        assert_eq!(&trace.flat[..16], pooled_first.flatten().as_slice());

        let expected_x: f64 = [0, 5, 10, 11, 14, 15, 18, 19, 22, 24, 25, 28, 37]
            .iter()
            .map(|&i| trace.flat[i])
            .sum::<f64>() / 13.0 * 100.0;
        assert!((trace.confidence.x - expected_x).abs() < EPS);
    }
}

#[test]
fn all_shaded_center_map_is_one_ninth() {
    let map = convolve(&PixelGrid::uniform(true), &Filter::center());
    assert!(map.data.iter().flatten().all(|&v| (v - 1.0 / 9.0).abs() < EPS));
}

#[test]
fn drawing_with_a_stray_character_fails_to_decode() {
    let text = "@.......@\n.@.....@.\n..@...@..\n...@.@...\n....x....\n...@.@...\n..@...@..\n.@.....@.\n@.......@\n";
    assert!(matches!(PixelGrid::parse(text), Err(CnnError::Format { line: 5, column: 5, found: 'x' })));
}

#[test]
fn missing_drawing_file_is_an_io_error() {
    assert!(matches!(PixelGrid::load("does/not/exist.txt"), Err(CnnError::Io(_))));
}

#[test]
fn spec_with_out_of_range_index_never_builds() {
    let mut spec = NetworkSpec::default();
    spec.x_indices.indices[0] = 100;
    assert!(matches!(Network::new(spec), Err(CnnError::Index { index: 100, len: 48, .. })));
}
