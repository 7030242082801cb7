<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Profile page navigation link</description>
   <name>lnk_Profile</name>
   <tag></tag>
   <elementGuidId>common-nav-profile</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//a[contains(text(), 'Profile') or @href='/profile']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>a[href='/profile'], nav a:contains('Profile')</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
