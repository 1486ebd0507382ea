use crate::stats::order_statistic;

#[test]
fn percentile_and_median_use_floor_of_p_times_n_minus_one() {
    let sorted = [100, 150, 200, 250, 300];

    // floor(0.95 * 4) = 3
    assert_eq!(order_statistic(&sorted, 0.95), Some(250));
    // floor(0.5 * 4) = 2
    assert_eq!(order_statistic(&sorted, 0.5), Some(200));
}

#[test]
fn single_sample_is_every_order_statistic() {
    assert_eq!(order_statistic(&[42], 0.95), Some(42));
    assert_eq!(order_statistic(&[42], 0.5), Some(42));
}

#[test]
fn even_sample_count_takes_lower_middle() {
    // floor(0.5 * 3) = 1
    assert_eq!(order_statistic(&[1, 2, 3, 4], 0.5), Some(2));
}

#[test]
fn twenty_one_samples_hit_the_last_but_one() {
    let sorted: Vec<u64> = (0..21).collect();

    // floor(0.95 * 20) = 19
    assert_eq!(order_statistic(&sorted, 0.95), Some(19));
}

#[test]
fn empty_slice_has_no_order_statistic() {
    assert_eq!(order_statistic(&[], 0.95), None);
}
