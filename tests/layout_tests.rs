//! Tests for the time record layout

#[cfg(test)]
mod tests {
    use std::mem::{align_of, size_of};

    use shmtime::{
        layout::{RESERVED_SLOTS, MODE_COUNTED, MODE_VALID_FLAG},
        probe, ShmTime, ShmTimeLayout, TargetModel, TimeT,
    };

    #[test]
    fn test_size_accounts_for_padding() {
        let layout = ShmTimeLayout::measure();
        let field_bytes = 8 * size_of::<i32>() + 2 * size_of::<TimeT>() + RESERVED_SLOTS * size_of::<i32>();

        assert!(layout.size >= field_bytes);
        assert_eq!(layout.size % align_of::<ShmTime>(), 0);
        assert_eq!(layout.align, align_of::<ShmTime>());
    }

    #[test]
    fn test_time_width_by_data_model() {
        let layout = ShmTimeLayout::measure();

        #[cfg(target_pointer_width = "64")]
        assert_eq!(layout.time_width, 8);
        #[cfg(target_pointer_width = "32")]
        assert_eq!(layout.time_width, 4);
    }

    #[test]
    fn test_offsets_non_decreasing() {
        for layout in [
            ShmTimeLayout::measure(),
            TargetModel::LP64.layout(),
            TargetModel::ILP32.layout(),
        ] {
            let offsets = layout.field_offsets();
            for pair in offsets.windows(2) {
                assert!(
                    pair[0].1 <= pair[1].1,
                    "{} at {} precedes {} at {}",
                    pair[0].0,
                    pair[0].1,
                    pair[1].0,
                    pair[1].1
                );
            }
        }
    }

    #[test]
    fn test_last_reserved_is_ninth_element() {
        let layout = ShmTimeLayout::measure();
        assert_eq!(layout.last_reserved, layout.reserved + 9 * size_of::<i32>());
    }

    #[test]
    fn test_host_matches_reference_configuration() {
        let measured = ShmTimeLayout::measure();

        #[cfg(target_pointer_width = "64")]
        {
            assert_eq!(measured, TargetModel::LP64.layout());
            assert_eq!(measured.size, 96);
            assert_eq!(measured.last_reserved, 88);
        }
        #[cfg(target_pointer_width = "32")]
        {
            assert_eq!(measured, TargetModel::ILP32.layout());
            assert_eq!(measured.size, 80);
            assert_eq!(measured.last_reserved, 76);
        }
    }

    #[test]
    fn test_probe_holds_no_data() {
        let record = probe();
        assert_eq!(record.mode, MODE_VALID_FLAG);
        assert_ne!(record.mode, MODE_COUNTED);
        assert_eq!(record.count, 0);
        assert_eq!(record.valid, 0);
        assert!(record.dummy.iter().all(|&slot| slot == 0));
    }
}
