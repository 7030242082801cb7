<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Logout button</description>
   <name>btn_Logout</name>
   <tag></tag>
   <elementGuidId>common-logout-button</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//button[contains(text(), 'Logout') or contains(text(), 'Sign Out') or contains(text(), 'Log out')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='logout-button'], button:contains('Logout')</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
