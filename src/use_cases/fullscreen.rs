use crate::domain::camera::Controls;
use crate::domain::ports::{FullscreenApi, FullscreenTarget};
use tracing::debug;

/// Requests fullscreen through the first entry point the target supports.
///
/// Silently does nothing when none is available.
pub fn request_fullscreen<T: FullscreenTarget + ?Sized>(target: &mut T) -> Option<FullscreenApi> {
    let api = FullscreenApi::PREFERENCE
        .into_iter()
        .find(|&api| target.supports(api))?;
    target.request(api);
    debug!(?api, "fullscreen requested");
    Some(api)
}

/// Click handler for the render surface; only acts once device-orientation
/// controls have armed fullscreen-on-click.
pub fn handle_click<T: FullscreenTarget + ?Sized>(
    controls: &Controls,
    target: &mut T,
) -> Option<FullscreenApi> {
    if !controls.fullscreen_on_click() {
        return None;
    }
    request_fullscreen(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeElement {
        supported: Vec<FullscreenApi>,
        requested: Vec<FullscreenApi>,
    }

    impl FakeElement {
        fn with(supported: &[FullscreenApi]) -> Self {
            Self {
                supported: supported.to_vec(),
                requested: Vec::new(),
            }
        }
    }

    impl FullscreenTarget for FakeElement {
        fn supports(&self, api: FullscreenApi) -> bool {
            self.supported.contains(&api)
        }

        fn request(&mut self, api: FullscreenApi) {
            self.requested.push(api);
        }
    }

    #[test]
    fn standard_entry_point_wins() {
        let mut el = FakeElement::with(&[FullscreenApi::Webkit, FullscreenApi::Standard]);
        assert_eq!(request_fullscreen(&mut el), Some(FullscreenApi::Standard));
        assert_eq!(el.requested, [FullscreenApi::Standard]);
    }

    #[test]
    fn vendor_prefixes_are_tried_in_order() {
        let mut el = FakeElement::with(&[FullscreenApi::Webkit, FullscreenApi::Moz]);
        assert_eq!(request_fullscreen(&mut el), Some(FullscreenApi::Moz));

        let mut el = FakeElement::with(&[FullscreenApi::Webkit]);
        assert_eq!(request_fullscreen(&mut el), Some(FullscreenApi::Webkit));
    }

    #[test]
    fn unsupported_target_is_left_alone() {
        let mut el = FakeElement::with(&[]);
        assert_eq!(request_fullscreen(&mut el), None);
        assert!(el.requested.is_empty());
    }

    #[test]
    fn clicks_only_go_fullscreen_after_orientation_switch() {
        let mut el = FakeElement::with(&[FullscreenApi::Standard]);
        let mut controls = Controls::default();

        assert_eq!(handle_click(&controls, &mut el), None);
        controls.on_device_orientation(Some(90.0));
        assert_eq!(handle_click(&controls, &mut el), Some(FullscreenApi::Standard));
        assert_eq!(el.requested.len(), 1);
    }
}
