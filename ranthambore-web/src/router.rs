use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/safari")]
    Safari,
    #[at("/safari/booking")]
    SafariBooking,
    #[at("/hotels")]
    Hotels,
    #[at("/hotels/booking")]
    HotelBooking,
    #[at("/chambal")]
    Chambal,
    #[at("/packages")]
    Packages,
    #[at("/packages/booking")]
    PackageBooking,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Entries in the primary navigation, with their translation keys.
    pub const NAV: [(Self, &'static str); 5] = [
        (Self::Home, "nav.home"),
        (Self::Safari, "nav.safari"),
        (Self::Hotels, "nav.hotels"),
        (Self::Chambal, "nav.chambal"),
        (Self::Packages, "nav.packages"),
    ];

    /// The navigation entry a page belongs to.
    #[must_use]
    pub const fn section(&self) -> Option<Self> {
        match self {
            Self::Home => Some(Self::Home),
            Self::Safari | Self::SafariBooking => Some(Self::Safari),
            Self::Hotels | Self::HotelBooking => Some(Self::Hotels),
            Self::Chambal => Some(Self::Chambal),
            Self::Packages | Self::PackageBooking => Some(Self::Packages),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_pages_belong_to_their_listing() {
        assert_eq!(Route::SafariBooking.section(), Some(Route::Safari));
        assert_eq!(Route::HotelBooking.section(), Some(Route::Hotels));
        assert_eq!(Route::PackageBooking.section(), Some(Route::Packages));
        assert_eq!(Route::NotFound.section(), None);
    }

    #[test]
    fn paths_round_trip() {
        for (route, _) in Route::NAV {
            assert_eq!(Route::recognize(&route.to_path()), Some(route.clone()));
        }
        assert_eq!(Route::recognize("/safari/booking"), Some(Route::SafariBooking));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }
}
